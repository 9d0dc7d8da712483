use crate::config::constants::REPORT_LINK_PREVIEW;
use crate::structs::email_analysis::EmailAnalysis;
use crate::structs::url_analysis::UrlAnalysis;

const URL_BANNER_WIDTH: usize = 50;
const EMAIL_BANNER_WIDTH: usize = 60;

/// Renders analysis results as plain-text reports. Presentation only.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn url_report(analysis: &UrlAnalysis) -> String {
        let banner = "=".repeat(URL_BANNER_WIDTH);
        let mut report = format!("\n{banner}\nPHISHGUARD URL ANALYSIS REPORT\n{banner}\n");

        report.push_str(&format!("URL: {}\n", analysis.url));
        report.push_str(&format!("Time: {}\n", analysis.timestamp));
        report.push_str(&format!(
            "Final Verdict: {} {}\n",
            analysis.verdict,
            analysis.verdict.emoji()
        ));
        report.push_str(&format!("Risk Score: {}/100\n", analysis.risk_score));
        report.push_str("\nFINDINGS:\n");
        push_bullets(&mut report, analysis.findings.iter());

        if let Some(title) = &analysis.page_title {
            report.push_str(&format!("\nPage Title: {title}\n"));
        }

        report.push_str(&format!("\n{banner}\n"));
        report
    }

    pub fn email_report(analysis: &EmailAnalysis) -> String {
        let banner = "=".repeat(EMAIL_BANNER_WIDTH);
        let mut report = format!("\n{banner}\nEMAIL ANALYSIS REPORT\n{banner}\n");

        report.push_str(&format!("Email Hash: {}\n", analysis.email_hash));
        report.push_str(&format!("Time: {}\n", analysis.timestamp));
        report.push_str(&format!(
            "Verdict: {} {}\n",
            analysis.verdict,
            analysis.verdict.emoji()
        ));
        report.push_str(&format!("Risk Score: {}/100\n", analysis.risk_score));

        report.push_str("\nPATTERNS DETECTED:\n");
        push_bullets(&mut report, analysis.patterns_found.iter());

        // Pattern entries are also findings; list them once.
        report.push_str("\nFINDINGS:\n");
        push_bullets(
            &mut report,
            analysis
                .findings
                .iter()
                .filter(|finding| !analysis.patterns_found.contains(finding)),
        );

        if !analysis.links_found.is_empty() {
            report.push_str(&format!("\nURLS FOUND ({}):\n", analysis.links_found.len()));
            for (i, link) in analysis.links_found.iter().take(REPORT_LINK_PREVIEW).enumerate() {
                report.push_str(&format!("{}. {link}\n", i + 1));
            }
            if analysis.links_found.len() > REPORT_LINK_PREVIEW {
                report.push_str(&format!(
                    "... and {} more\n",
                    analysis.links_found.len() - REPORT_LINK_PREVIEW
                ));
            }
        }

        report.push_str(&format!("\n{banner}\n"));
        report
    }
}

fn push_bullets<'a>(report: &mut String, items: impl Iterator<Item = &'a String>) {
    for item in items {
        report.push_str(&format!("• {item}\n"));
    }
}
