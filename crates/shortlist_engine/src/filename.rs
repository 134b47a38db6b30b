use shortlist_core::is_pdf_name;

const MAX_STEM_CHARS: usize = 120;

/// Download name for one analysed resume: `{stem}_analysis.json`, where the
/// stem is the resume name without its `.pdf` suffix, made safe to write.
pub fn entry_download_filename(resume_name: &str) -> String {
    let stem = if is_pdf_name(resume_name) {
        // The suffix is ASCII, so this slice sits on a char boundary.
        &resume_name[..resume_name.len() - 4]
    } else {
        resume_name
    };
    format!("{}_analysis.json", sanitize_stem(stem))
}

fn sanitize_stem(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let mut stem: String = cleaned
        .trim_matches(|c: char| c == '.' || c.is_whitespace())
        .chars()
        .take(MAX_STEM_CHARS)
        .collect();
    if stem.is_empty() {
        stem = "resume".to_string();
    }
    if is_reserved_windows_name(&stem) {
        stem.push('_');
    }
    stem
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}
