use std::fmt::Write;

use storage::models::{ScoreEntry, StudentTotal};

use crate::flash::Flash;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 960px; padding: 0 1rem; }
nav a { margin-right: 1rem; }
table { border-collapse: collapse; width: 100%; margin-bottom: 2rem; }
th, td { border-bottom: 1px solid #ddd; padding: .4rem; text-align: left; }
.flash { padding: .6rem 1rem; border-radius: 4px; margin: 1rem 0; }
.flash.ok { background: #e6f6ea; color: #1d6b35; }
.flash.err { background: #fdecea; color: #8a1c1c; }
form.score label { display: block; margin: .6rem 0; }
form.inline { display: inline; }
"#;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(event_title: &str, page_title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash_html = flash
        .map(|f| {
            format!(
                r#"<div class="flash {}">{}</div>"#,
                f.kind.css_class(),
                escape_html(&f.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{page} · {event}</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/judges">Judges Portal</a><a href="/results">Results</a></nav>
<h1>{page}</h1>
{flash_html}
{body}
</body>
</html>
"#,
        page = escape_html(page_title),
        event = escape_html(event_title),
    )
}

pub fn home_page(event_title: &str) -> String {
    let body = format!(
        r#"<p>Welcome to {}. Judges record scores in the <a href="/judges">Judges Portal</a>;
everyone can follow the <a href="/results">results</a>.</p>"#,
        escape_html(event_title)
    );
    layout(event_title, event_title, None, &body)
}

pub fn judges_page(event_title: &str, flash: Option<&Flash>) -> String {
    let body = r#"<form class="score" method="post" action="/judges">
<label>Programme code <input name="programme_code" required></label>
<label>Student ID <input name="student_id" required></label>
<label>Student name <input name="student_name" required></label>
<label>Score <input name="score" inputmode="decimal" required></label>
<label>Remarks <textarea name="remarks" rows="3"></textarea></label>
<button type="submit">Save score</button>
</form>"#;
    layout(event_title, "Judges Portal", flash, body)
}

pub fn results_page(
    event_title: &str,
    flash: Option<&Flash>,
    recent: &[ScoreEntry],
    totals: &[StudentTotal],
) -> String {
    let mut body = String::from("<h2>Leaderboard</h2>\n");

    if totals.is_empty() {
        body.push_str("<p>No scores yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>#</th><th>Student ID</th><th>Name</th><th>Total</th></tr>\n",
        );
        for (rank, total) in totals.iter().enumerate() {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                rank + 1,
                escape_html(&total.student_id),
                escape_html(&total.student_name),
                total.total
            );
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h2>Recent entries</h2>\n");

    if recent.is_empty() {
        body.push_str("<p>No entries yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>Entry</th><th>Programme</th><th>Student ID</th><th>Name</th>\
             <th>Score</th><th>Remarks</th><th>Time</th><th></th></tr>\n",
        );
        for entry in recent {
            let _ = writeln!(
                body,
                "<tr><td>#{id}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td><form class=\"inline\" method=\"post\" action=\"/results/{id}/delete\">\
                 <button type=\"submit\">Delete</button></form></td></tr>",
                escape_html(&entry.programme_code),
                escape_html(&entry.student_id),
                escape_html(&entry.student_name),
                entry.score,
                escape_html(&entry.remarks),
                entry.created_at.format("%Y-%m-%d %H:%M:%S"),
                id = entry.id,
            );
        }
        body.push_str("</table>\n");
    }

    layout(event_title, "Results", flash, &body)
}
