use std::fmt::Write;

use nmonchart_core::UploadReport;

use super::html_escape;

/// Render the status page for one upload.
///
/// Layout: the diagnostics list, any failure messages, the success line when the file
/// was stored, then links back to the upload form and on to the chart index.
pub fn render_report(report: &UploadReport, upload_form_url: &str, chart_index_url: &str) -> String {
    let d = &report.diagnostics;
    let mut page = String::with_capacity(1024);

    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>nmon upload</title>\n</head>\n<body>\n");
    page.push_str("<p>Processing your upload</p>\n<ol>\n");
    // Writing into a String cannot fail.
    let _ = writeln!(page, "<li>name - {}</li>", html_escape(&d.name));
    let _ = writeln!(page, "<li>size - {}</li>", d.size);
    let _ = writeln!(page, "<li>type - {}</li>", html_escape(&d.content_type));
    let _ = writeln!(page, "<li>tmp_name - {}</li>", html_escape(&d.temp_path));
    let _ = writeln!(page, "<li>file extension - {}</li>", html_escape(&d.extension));
    page.push_str("</ol>\n");

    for message in report.messages() {
        let _ = writeln!(page, "<p>{}</p>", html_escape(&message));
    }

    if let Some(success) = report.success_message() {
        let _ = writeln!(page, "<ol>\n<li>{}</li>\n</ol>", html_escape(&success));
    }

    page.push_str("<ul>\n");
    let _ = writeln!(
        page,
        "<li><a href=\"{}\">Upload another nmon data file</a></li>",
        html_escape(upload_form_url)
    );
    let _ = writeln!(
        page,
        "<li><a href=\"{}\">See your graphs</a> after 60 seconds</li>",
        html_escape(chart_index_url)
    );
    page.push_str("</ul>\n</body>\n</html>\n");

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use nmonchart_core::{
        Check, CheckOutcome, UploadDiagnostics, UploadError, UploadOutcome, ValidationResult,
    };

    const FORM: &str = "http://w3.aixncc.uk.ibm.com/nmon_upload.html";
    const CHARTS: &str = "http://w3.aixncc.uk.ibm.com/nmonchart/index.html";

    fn report(name: &str, outcome: UploadOutcome, extension_ok: bool) -> UploadReport {
        let extension_result = if extension_ok {
            Ok(())
        } else {
            Err(UploadError::UnsupportedExtension {
                extension: "txt".to_string(),
                allowed: vec!["nmon".to_string(), "gif".to_string()],
            })
        };
        UploadReport {
            diagnostics: UploadDiagnostics {
                name: name.to_string(),
                size: 42,
                content_type: "text/plain".to_string(),
                temp_path: "/tmp/nmonchart-upload/upload-abc".to_string(),
                extension: "nmon".to_string(),
            },
            validation: ValidationResult::new(vec![
                CheckOutcome {
                    check: Check::Size,
                    result: Ok(()),
                },
                CheckOutcome {
                    check: Check::Extension,
                    result: extension_result,
                },
            ]),
            outcome,
        }
    }

    #[test]
    fn stored_page_lists_diagnostics_success_and_links() {
        let page = render_report(
            &report(
                "host.nmon",
                UploadOutcome::Stored {
                    file_name: "host.nmon".to_string(),
                },
                true,
            ),
            FORM,
            CHARTS,
        );

        assert!(page.contains("Processing your upload"));
        assert!(page.contains("<li>name - host.nmon</li>"));
        assert!(page.contains("<li>size - 42</li>"));
        assert!(page.contains("<li>type - text/plain</li>"));
        assert!(page.contains("<li>tmp_name - /tmp/nmonchart-upload/upload-abc</li>"));
        assert!(page.contains("<li>file extension - nmon</li>"));
        assert!(page.contains("<li>The file host.nmon has been uploaded.</li>"));
        assert!(page.contains(&format!("<a href=\"{}\">Upload another nmon data file</a>", FORM)));
        assert!(page.contains(&format!("<a href=\"{}\">See your graphs</a> after 60 seconds", CHARTS)));
        assert!(!page.contains("Sorry"));
    }

    #[test]
    fn rejected_page_shows_failures_and_links() {
        let page = render_report(
            &report("notes.txt", UploadOutcome::Rejected, false),
            FORM,
            CHARTS,
        );

        assert!(page.contains("<p>Sorry, only .nmon or .gif files are allowed.</p>"));
        assert!(page.contains("<p>Sorry, your file was not uploaded.</p>"));
        assert!(!page.contains("has been uploaded"));
        assert!(page.contains("Upload another nmon data file"));
    }

    #[test]
    fn client_strings_are_escaped() {
        let page = render_report(
            &report("<img src=x onerror=alert(1)>.nmon", UploadOutcome::Rejected, true),
            FORM,
            CHARTS,
        );

        assert!(!page.contains("<img"));
        assert!(page.contains("&lt;img src=x onerror=alert(1)&gt;.nmon"));
    }
}
