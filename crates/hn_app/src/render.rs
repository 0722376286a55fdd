use hn_core::{FrontPageView, StoryRowView};
use html_escape::{encode_double_quoted_attribute, encode_text};

const STYLE: &str = r#"
body { font-family: Verdana, Geneva, sans-serif; font-size: 10pt; background: #f6f6ef; margin: 0; }
header { background: #ff6600; padding: 4px 8px; font-weight: bold; }
ol { padding-left: 40px; }
li { margin: 6px 0; }
.host, .meta, footer { color: #828282; font-size: 8pt; }
footer { padding: 8px 40px; }
"#;

pub fn render_front_page(view: &FrontPageView) -> String {
    let mut rows = String::new();
    for row in &view.rows {
        rows.push_str(&render_row(row));
    }

    let notice = if view.is_short() {
        format!(
            r#"<p class="meta">Only {} of {} linked stories were available.</p>"#,
            view.rows.len(),
            view.requested
        )
    } else {
        String::new()
    };

    let content = format!(
        r#"<ol>{rows}</ol>{notice}<footer>This page was rendered in {elapsed}</footer>"#,
        elapsed = encode_text(&view.elapsed_label),
    );
    build_page(&content)
}

pub fn render_error(message: &str) -> String {
    build_page(&format!(r#"<p class="meta">{}</p>"#, encode_text(message)))
}

fn render_row(row: &StoryRowView) -> String {
    let host = if row.host.is_empty() {
        String::new()
    } else {
        format!(r#" <span class="host">({})</span>"#, encode_text(&row.host))
    };
    format!(
        r#"<li value="{rank}"><a href="{url}">{title}</a>{host}<div class="meta">{score} points by {by} {age} | <a href="{discussion}">{comments} comments</a></div></li>"#,
        rank = row.rank,
        url = encode_double_quoted_attribute(&row.url),
        title = encode_text(&row.title),
        score = row.score,
        by = encode_text(&row.by),
        age = encode_text(&row.age),
        discussion = encode_double_quoted_attribute(&row.discussion_url),
        comments = row.comments,
    )
}

fn build_page(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Quiet Hacker News</title><style>{STYLE}</style></head>
<body><header>Quiet Hacker News</header>{content}</body>
</html>"#
    )
}
