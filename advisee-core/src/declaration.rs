//! Declaration of Major form
//!
//! Renders the printable form a student signs when declaring a major. The
//! document only embeds student details, the major name and a timestamp.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use crate::plan::PlanStore;
use crate::session::SessionState;
use crate::student::StudentInfo;
use crate::{Error, Result};

const TITLE: &str = "DECLARATION OF MAJOR FORM";
const SIGNATURE_LINES: [&str; 3] = ["Student Signature", "Academic Advisor Signature", "Department Approval"];
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output format of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationFormat {
    #[default]
    Text,
    Html,
}

impl fmt::Display for DeclarationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationFormat::Text => write!(f, "text"),
            DeclarationFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for DeclarationFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(DeclarationFormat::Text),
            "html" | "htm" => Ok(DeclarationFormat::Html),
            _ => Err(Error::Parse(format!("Unknown declaration format: {}", s))),
        }
    }
}

/// Labelled fields in form order
fn fields(info: &StudentInfo, major_name: &str) -> [(&'static str, String); 8] {
    [
        ("Academic Year", info.academic_year.clone()),
        ("Semester", info.semester.to_string()),
        ("Student ID", info.student_id.clone()),
        ("Name", info.full_name()),
        ("Contact No", info.contact_no.clone()),
        ("Email", info.email.clone()),
        ("I intend to graduate at the end of", info.graduation_term.clone()),
        ("Declaring Major in", major_name.to_string()),
    ]
}

/// Render the form for a student and major
pub fn render_declaration(
    info: &StudentInfo,
    major_name: &str,
    generated_at: NaiveDateTime,
    format: DeclarationFormat,
) -> String {
    let stamp = generated_at.format(TIMESTAMP_FORMAT).to_string();
    let fields = fields(info, major_name);
    match format {
        DeclarationFormat::Text => render_text(&fields, &stamp),
        DeclarationFormat::Html => render_html(&fields, &stamp),
    }
}

/// Render the form for a session's selected major
pub fn render_for_session(
    session: &SessionState,
    store: &PlanStore,
    generated_at: NaiveDateTime,
    format: DeclarationFormat,
) -> Result<String> {
    let plan = session.require_plan(store)?;
    tracing::info!(major = %plan.key, %format, "Rendering declaration form");
    Ok(render_declaration(session.student(), &plan.name, generated_at, format))
}

fn render_text(fields: &[(&'static str, String)], stamp: &str) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{:^60}", TITLE);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out);

    // The first six fields are identity, the last two the declaration itself
    for (i, (label, value)) in fields.iter().enumerate() {
        if i == 6 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{}: {}", label, value);
    }

    let _ = writeln!(out);
    for line in SIGNATURE_LINES {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: ___________________________ Date: ___________", line);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Generated by AdviseeMatrix on {}", stamp);
    let _ = writeln!(out, "{}", rule);
    out
}

fn render_html(fields: &[(&'static str, String)], stamp: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<div style='border: 2px solid #333; padding: 20px; margin: 20px 0;'>");
    let _ = writeln!(out, "  <h3 style='text-align: center; margin-bottom: 30px;'>{}</h3>", TITLE);
    for (i, (label, value)) in fields.iter().enumerate() {
        if i == 6 {
            let _ = writeln!(out, "  <br>");
        }
        let _ = writeln!(out, "  <p><strong>{}:</strong> {}</p>", label, escape_html(value));
    }

    let _ = writeln!(out, "  <br><br>");
    for line in SIGNATURE_LINES {
        let _ = writeln!(out, "  <p>{}: ___________________________ Date: ___________</p>", line);
        let _ = writeln!(out, "  <br>");
    }

    let _ = writeln!(
        out,
        "  <p style='text-align: center; margin-top: 30px; font-size: 12px;'>Generated by AdviseeMatrix on {}</p>",
        stamp
    );
    let _ = writeln!(out, "</div>");
    out
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
