use std::fmt::Write;

use nmonchart_core::constants::UPLOAD_FIELD_NAME;

use super::html_escape;

/// Render the upload form posting to `action`.
pub fn render_upload_form(action: &str, allowed_extensions: &[String], max_file_size: u64) -> String {
    let accepted: Vec<String> = allowed_extensions
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect();
    let accepted = html_escape(&accepted.join(","));

    let mut page = String::with_capacity(768);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Upload nmon data</title>\n</head>\n<body>\n");
    page.push_str("<h1>Upload an nmon data file</h1>\n");
    let _ = writeln!(
        page,
        "<form action=\"{}\" method=\"post\" enctype=\"multipart/form-data\">",
        html_escape(action)
    );
    let _ = writeln!(
        page,
        "<p>Select file to upload: <input type=\"file\" name=\"{}\" id=\"{}\" accept=\"{}\"></p>",
        UPLOAD_FIELD_NAME, UPLOAD_FIELD_NAME, accepted
    );
    page.push_str("<p><input type=\"submit\" value=\"Upload File\" name=\"submit\"></p>\n");
    page.push_str("</form>\n");
    let _ = writeln!(
        page,
        "<p>Accepted file types: {}. Maximum size: {} bytes.</p>",
        accepted, max_file_size
    );
    page.push_str("</body>\n</html>\n");

    page
}
