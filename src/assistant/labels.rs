//! Source-path to document-label mapping.
//!
//! Pure lookup data: an ordered rule table matched case-insensitively
//! against the full source path. More specific rules come first, so BNSS
//! files are not swallowed by the shorter "bns" needle.

pub const UNKNOWN_DOCUMENT: &str = "Unknown Document";
pub const GENERIC_DOCUMENT: &str = "Legal Document";

/// Each rule is a set of substrings that must all appear, and the label.
const LABEL_RULES: &[(&[&str], &str)] = &[
    (&["constitution"], "Constitution of India"),
    (&["bnss", "2024"], "Bharatiya Nagarik Suraksha Sanhita (BNSS) 2024"),
    (&["bns", "2024"], "Bharatiya Nyaya Sanhita (BNS) 2024"),
    (&["bsa", "2024"], "Bharatiya Sakshya Adhiniyam (BSA) 2024"),
    (&["penal"], "Indian Penal Code (IPC) 1860"),
    (&["ipc"], "Indian Penal Code (IPC) 1860"),
    (&["crpc"], "Code of Criminal Procedure (CrPC) 1973"),
    (&["criminal"], "Code of Criminal Procedure (CrPC) 1973"),
    (&["supreme"], "Supreme Court Judgments"),
    (&["sc"], "Supreme Court Judgments"),
    (&["high"], "High Court Cases"),
    (&["hc"], "High Court Cases"),
];

/// Map a source path to a friendly document label. Empty paths label as
/// "Unknown Document"; unmatched ones as "Legal Document".
pub fn document_label(source_path: &str) -> &'static str {
    if source_path.trim().is_empty() {
        return UNKNOWN_DOCUMENT;
    }

    let haystack = source_path.to_lowercase();
    for (needles, label) in LABEL_RULES {
        if needles.iter().all(|needle| haystack.contains(needle)) {
            return label;
        }
    }

    GENERIC_DOCUMENT
}
