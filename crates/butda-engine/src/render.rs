//! Response rendering.
//!
//! [`render`] turns the raw summary text returned by the research service into
//! HTML markup that can be inserted into a page as-is. The transformation is an
//! ordered list of [`STAGES`]; each stage takes and returns a [`RenderBuffer`]
//! and can be exercised on its own.
//!
//! Safety comes from the ordering: fenced code is pulled out and escaped
//! first, then all remaining text is escaped exactly once, and only after that
//! do the markdown-like rules insert tags of their own. Everything the
//! renderer does not recognize reaches the output escaped.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Marks a protected block fragment (fenced code) inside the working text.
const BLOCK_MARK: char = '\u{0}';

/// Marks a protected inline fragment (inline code) inside the working text.
const INLINE_MARK: char = '\u{1}';

/// Link destination used when the supplied one is not on the allow-list.
pub const SAFE_PLACEHOLDER_HREF: &str = "#";

/// URL prefixes accepted as link destinations (compared case-insensitively).
pub const ALLOWED_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("fence pattern"));
static HEADING_3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^###[ \t]*(.*)$").expect("h3 pattern"));
static HEADING_2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##[ \t]*(.*)$").expect("h2 pattern"));
static HEADING_1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]*(.*)$").expect("h1 pattern"));
static STRONG_EM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").expect("strong emphasis pattern"));
static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("strong pattern"));
static EM_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^*])\*(.+?)\*").expect("star emphasis pattern"));
static EM_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^_])_(.+?)_").expect("underscore emphasis pattern"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("inline code pattern"));
/// Spans emphasis must leave alone: inline code and link destinations.
static EMPHASIS_EXEMPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`\n]+`|\]\([^)\n]*\)").expect("exempt pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\n]+)\)").expect("link pattern"));
static BLOCK_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x00(\d+)\x00").expect("block slot pattern"));
static INLINE_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x01(\d+)\x01").expect("inline slot pattern"));

/// Working state threaded through the stages.
///
/// `text` is the document being rewritten. Fragments that later stages must
/// not touch (escaped code) are moved into side tables and replaced in `text`
/// by numbered slots until the final splice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderBuffer {
    /// The document text.
    pub text: String,
    blocks: Vec<String>,
    inlines: Vec<String>,
}

impl RenderBuffer {
    /// Start a buffer from raw input.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            text: raw.into(),
            ..Self::default()
        }
    }

    /// Number of protected block fragments set aside so far.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of protected inline fragments set aside so far.
    pub fn inline_count(&self) -> usize {
        self.inlines.len()
    }

    fn stash_block(&mut self, markup: String) -> String {
        self.blocks.push(markup);
        format!("{BLOCK_MARK}{}{BLOCK_MARK}", self.blocks.len() - 1)
    }

    fn stash_inline(&mut self, markup: String) -> String {
        self.inlines.push(markup);
        format!("{INLINE_MARK}{}{INLINE_MARK}", self.inlines.len() - 1)
    }
}

/// One named step of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    /// Short name, used in logs and tests.
    pub name: &'static str,
    /// The transformation.
    pub apply: fn(RenderBuffer) -> RenderBuffer,
}

/// The pipeline, in the order it must run.
pub const STAGES: [Stage; 10] = [
    Stage { name: "normalize", apply: normalize_line_endings },
    Stage { name: "fenced-code", apply: extract_fenced_code },
    Stage { name: "escape", apply: escape_text },
    Stage { name: "headings", apply: rewrite_headings },
    Stage { name: "emphasis", apply: rewrite_emphasis },
    Stage { name: "inline-code", apply: extract_inline_code },
    Stage { name: "links", apply: rewrite_links },
    Stage { name: "lists", apply: group_lists },
    Stage { name: "paragraphs", apply: wrap_paragraphs },
    Stage { name: "splice", apply: splice_fragments },
];

/// Render raw response text to sanitized markup.
///
/// Never fails: any input, however malformed, produces markup in which every
/// character not consumed by a recognized construct appears escaped.
pub fn render(raw: &str) -> String {
    STAGES
        .iter()
        .fold(RenderBuffer::new(raw), |buffer, stage| (stage.apply)(buffer))
        .text
}

/// Replace `&`, `<`, `>`, `"` and `'` with character references.
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

/// Decide the `href` for a link destination.
///
/// Returns the destination unchanged when it starts with an allowed scheme,
/// and [`SAFE_PLACEHOLDER_HREF`] otherwise.
pub fn safe_href(destination: &str) -> &str {
    let destination = destination.trim();
    if destination.contains(|c: char| c == BLOCK_MARK || c == INLINE_MARK) {
        return SAFE_PLACEHOLDER_HREF;
    }
    let lowered = destination.to_ascii_lowercase();
    if ALLOWED_SCHEMES
        .iter()
        .any(|scheme| lowered.starts_with(scheme) && lowered.len() > scheme.len())
    {
        destination
    } else {
        SAFE_PLACEHOLDER_HREF
    }
}

/// Stage 1: unify line endings and neutralize slot markers in the input.
pub fn normalize_line_endings(mut buffer: RenderBuffer) -> RenderBuffer {
    buffer.text = buffer
        .text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(|c: char| c == BLOCK_MARK || c == INLINE_MARK, "\u{FFFD}");
    buffer
}

/// Stage 2: escape and set aside fenced code blocks.
pub fn extract_fenced_code(mut buffer: RenderBuffer) -> RenderBuffer {
    let text = std::mem::take(&mut buffer.text);
    buffer.text = FENCE
        .replace_all(&text, |caps: &Captures<'_>| {
            let markup = format!("<pre><code>{}</code></pre>", escape_html(code_body(&caps[1])));
            format!("\n{}\n", buffer.stash_block(markup))
        })
        .into_owned();
    buffer
}

/// Strip an info-string line and the newlines hugging the fences.
fn code_body(raw: &str) -> &str {
    let body = match raw.split_once('\n') {
        Some((first, rest)) if is_info_string(first) => rest,
        _ => raw.strip_prefix('\n').unwrap_or(raw),
    };
    body.strip_suffix('\n').unwrap_or(body)
}

fn is_info_string(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+' | '#' | '.'))
}

/// Stage 3: escape every remaining literal character.
pub fn escape_text(mut buffer: RenderBuffer) -> RenderBuffer {
    buffer.text = escape_html(&buffer.text);
    buffer
}

/// Stage 4: `###`, `##` and `#` lines become `h3`, `h2` and `h1`.
pub fn rewrite_headings(mut buffer: RenderBuffer) -> RenderBuffer {
    buffer.text = {
        let text = HEADING_3.replace_all(&buffer.text, "<h3>${1}</h3>");
        let text = HEADING_2.replace_all(&text, "<h2>${1}</h2>");
        HEADING_1.replace_all(&text, "<h1>${1}</h1>").into_owned()
    };
    buffer
}

/// Stage 5: strong and emphasis spans, outside inline code and link targets.
pub fn rewrite_emphasis(mut buffer: RenderBuffer) -> RenderBuffer {
    buffer.text = map_outside(&EMPHASIS_EXEMPT, &buffer.text, |segment| {
        let text = STRONG_EM.replace_all(segment, "<strong><em>${1}</em></strong>");
        let text = STRONG.replace_all(&text, "<strong>${1}</strong>");
        let text = EM_STAR.replace_all(&text, "${1}<em>${2}</em>");
        EM_UNDERSCORE
            .replace_all(&text, "${1}<em>${2}</em>")
            .into_owned()
    });
    buffer
}

/// Stage 6: set aside inline code spans; their content stays as escaped text.
pub fn extract_inline_code(mut buffer: RenderBuffer) -> RenderBuffer {
    let text = std::mem::take(&mut buffer.text);
    buffer.text = INLINE_CODE
        .replace_all(&text, |caps: &Captures<'_>| {
            buffer.stash_inline(format!("<code>{}</code>", &caps[1]))
        })
        .into_owned();
    buffer
}

/// Stage 7: `[label](url)` becomes an anchor with a vetted destination.
pub fn rewrite_links(mut buffer: RenderBuffer) -> RenderBuffer {
    buffer.text = LINK
        .replace_all(&buffer.text, |caps: &Captures<'_>| {
            format!(
                r#"<a href="{}" rel="noopener">{}</a>"#,
                safe_href(&caps[2]),
                &caps[1]
            )
        })
        .into_owned();
    buffer
}

/// Stage 8: runs of adjacent `- ` lines become one unordered list each.
pub fn group_lists(mut buffer: RenderBuffer) -> RenderBuffer {
    let text = std::mem::take(&mut buffer.text);
    let mut lines: Vec<String> = Vec::new();
    let mut items: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if let Some(item) = list_item(line) {
            items.push(item);
            continue;
        }
        flush_list(&mut lines, &mut items);
        lines.push(line.to_string());
    }
    flush_list(&mut lines, &mut items);

    buffer.text = lines.join("\n");
    buffer
}

fn list_item(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('-')?;
    let item = rest.trim_start_matches(|c: char| c == ' ' || c == '\t');
    (item.len() < rest.len()).then_some(item)
}

fn flush_list(lines: &mut Vec<String>, items: &mut Vec<&str>) {
    if items.is_empty() {
        return;
    }
    let mut list = String::from("<ul>");
    for item in items.drain(..) {
        list.push_str("<li>");
        list.push_str(item);
        list.push_str("</li>");
    }
    list.push_str("</ul>");
    lines.push(list);
}

/// Stage 9: wrap inline runs between blank lines in paragraphs.
///
/// Lines holding a block construct (heading, list, code slot) are emitted as
/// they are and close any open paragraph.
pub fn wrap_paragraphs(mut buffer: RenderBuffer) -> RenderBuffer {
    let text = std::mem::take(&mut buffer.text);
    let mut out = String::with_capacity(text.len() + 16);
    let mut paragraph: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            flush_paragraph(&mut out, &mut paragraph);
        } else if is_block_line(line) {
            flush_paragraph(&mut out, &mut paragraph);
            out.push_str(line);
        } else {
            paragraph.push(line);
        }
    }
    flush_paragraph(&mut out, &mut paragraph);

    buffer.text = out;
    buffer
}

fn is_block_line(line: &str) -> bool {
    const BLOCK_OPENERS: [&str; 4] = ["<h1>", "<h2>", "<h3>", "<ul>"];
    BLOCK_OPENERS.iter().any(|opener| line.starts_with(opener))
        || BLOCK_SLOT
            .find(line)
            .is_some_and(|m| m.start() == 0 && m.end() == line.len())
}

fn flush_paragraph(out: &mut String, paragraph: &mut Vec<&str>) {
    if paragraph.is_empty() {
        return;
    }
    out.push_str("<p>");
    out.push_str(&paragraph.join("\n"));
    out.push_str("</p>");
    paragraph.clear();
}

/// Stage 10: put the protected fragments back.
pub fn splice_fragments(mut buffer: RenderBuffer) -> RenderBuffer {
    buffer.text = {
        let text = INLINE_SLOT.replace_all(&buffer.text, |caps: &Captures<'_>| {
            fragment(&buffer.inlines, &caps[1])
        });
        BLOCK_SLOT
            .replace_all(&text, |caps: &Captures<'_>| fragment(&buffer.blocks, &caps[1]))
            .into_owned()
    };
    buffer
}

fn fragment(table: &[String], index: &str) -> String {
    index
        .parse::<usize>()
        .ok()
        .and_then(|i| table.get(i))
        .cloned()
        .unwrap_or_default()
}

/// Apply `f` to the stretches of `text` that `exempt` does not match,
/// copying the matched stretches through untouched.
fn map_outside(exempt: &Regex, text: &str, mut f: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in exempt.find_iter(text) {
        out.push_str(&f(&text[last..m.start()]));
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&f(&text[last..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    /// Remove every construct the renderer emits, leaving only text.
    fn strip_constructs(markup: &str) -> String {
        let tags = Regex::new(
            r#"</?(?:p|h1|h2|h3|strong|em|code|pre|ul|li|a)>|<a href="[^"<>]*" rel="noopener">"#,
        )
        .unwrap();
        tags.replace_all(markup, "").into_owned()
    }

    fn assert_injection_safe(input: &str) {
        let markup = render(input);
        let residue = strip_constructs(&markup);
        assert!(
            !residue.chars().any(|c| matches!(c, '<' | '>' | '"' | '\'')),
            "unescaped markup character for input {input:?}: {markup}"
        );
        let entities = Regex::new(r"&(?:amp|lt|gt|quot|#39);").unwrap();
        assert!(
            !entities.replace_all(&residue, "").contains('&'),
            "bare ampersand for input {input:?}: {markup}"
        );
    }

    // ========================================================================
    // Whole-pipeline behavior
    // ========================================================================

    #[test]
    fn test_strong() {
        assert_snapshot!(render("**bold**"), @"<p><strong>bold</strong></p>");
    }

    #[test]
    fn test_heading_levels() {
        assert_snapshot!(render("# Title"), @"<h1>Title</h1>");
        assert_snapshot!(render("## Section"), @"<h2>Section</h2>");
        assert_snapshot!(render("### Detail"), @"<h3>Detail</h3>");
        assert_eq!(render("#Tight"), "<h1>Tight</h1>");
    }

    #[test]
    fn test_fenced_code_is_escaped_not_interpreted() {
        assert_snapshot!(render("```x<y```"), @"<pre><code>x&lt;y</code></pre>");

        let markup = render("```\n# not a heading\n**not bold** [x](http://a)\n```");
        assert_eq!(
            markup,
            "<pre><code># not a heading\n**not bold** [x](http://a)</code></pre>"
        );
    }

    #[test]
    fn test_fenced_code_drops_info_string() {
        assert_eq!(
            render("```rust\nfn main() {}\n```"),
            "<pre><code>fn main() {}</code></pre>"
        );
    }

    #[test]
    fn test_fenced_code_between_paragraphs() {
        assert_eq!(
            render("before\n```\na & b\n```\nafter"),
            "<p>before</p><pre><code>a &amp; b</code></pre><p>after</p>"
        );
    }

    #[test]
    fn test_script_link_gets_placeholder() {
        assert_snapshot!(
            render("[go](javascript:alert(1))"),
            @r##"<p><a href="#" rel="noopener">go</a>)</p>"##
        );
    }

    #[test]
    fn test_http_link_keeps_destination() {
        assert_eq!(
            render("[site](https://example.com/?a=1&b=2)"),
            r#"<p><a href="https://example.com/?a=1&amp;b=2" rel="noopener">site</a></p>"#
        );
    }

    #[test]
    fn test_link_destination_is_not_emphasized() {
        assert_eq!(
            render("[doc](https://example.com/a_b_c)"),
            r#"<p><a href="https://example.com/a_b_c" rel="noopener">doc</a></p>"#
        );
    }

    #[test]
    fn test_emphasis_variants() {
        assert_eq!(
            render("**x** and *y* and _z_"),
            "<p><strong>x</strong> and <em>y</em> and <em>z</em></p>"
        );
    }

    #[test]
    fn test_triple_star_nests_em_inside_strong() {
        assert_eq!(render("***x***"), "<p><strong><em>x</em></strong></p>");
        assert_eq!(
            render("***a*** then **b**"),
            "<p><strong><em>a</em></strong> then <strong>b</strong></p>"
        );
    }

    #[test]
    fn test_unmatched_delimiters_stay_literal() {
        assert_eq!(render("a * b"), "<p>a * b</p>");
        assert_eq!(render("**open"), "<p>**open</p>");
        assert_eq!(render("`tick"), "<p>`tick</p>");
        assert_eq!(render("[label](missing"), "<p>[label](missing</p>");
    }

    #[test]
    fn test_inline_code_content_untouched() {
        assert_eq!(
            render("use `a*b*c <d>` now"),
            "<p>use <code>a*b*c &lt;d&gt;</code> now</p>"
        );
    }

    #[test]
    fn test_list_grouping() {
        assert_eq!(
            render("- one\n- two\n\n- three"),
            "<ul><li>one</li><li>two</li></ul><ul><li>three</li></ul>"
        );
    }

    #[test]
    fn test_list_directly_after_heading() {
        assert_eq!(
            render("Intro\n## Heading\n- a\n- b\nTail"),
            "<p>Intro</p><h2>Heading</h2><ul><li>a</li><li>b</li></ul><p>Tail</p>"
        );
    }

    #[test]
    fn test_paragraph_boundaries() {
        assert_eq!(
            render("one\ntwo\n\n\nthree"),
            "<p>one\ntwo</p><p>three</p>"
        );
        assert_eq!(render(""), "");
        assert_eq!(render("\n\n  \n"), "");
    }

    #[test]
    fn test_crlf_input_matches_lf_input() {
        assert_eq!(
            render("# T\r\n- a\r\n- b\r\n\r\nend"),
            render("# T\n- a\n- b\n\nend")
        );
        assert_eq!(render("a\rb"), "<p>a\nb</p>");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        assert_eq!(
            render("<script>alert(\"x\")</script>"),
            "<p>&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;</p>"
        );
        assert_eq!(render("Tom's & Jerry's"), "<p>Tom&#39;s &amp; Jerry&#39;s</p>");
    }

    #[test]
    fn test_slot_markers_in_input_cannot_forge_fragments() {
        let markup = render("```a```\n\u{0}0\u{0} and \u{1}0\u{1}");
        assert_eq!(markup.matches("<pre>").count(), 1);
        assert!(!markup.contains('\u{0}'));
        assert!(!markup.contains('\u{1}'));
    }

    #[test]
    fn test_injection_safety_over_hostile_inputs() {
        let inputs = [
            "<img src=x onerror=alert(1)>",
            "[x](\" onmouseover=\"alert(1))",
            "[x](https://a.com/\"><script>)",
            "[<b>](http://ok)",
            "```<script>``` <b>after</b>",
            "# <h1>nested</h1>",
            "- <li>item</li>\n- 'quoted'",
            "**<em>**",
            "`<code>` & `&amp;`",
            "[a](http://x`<b>`y)",
            "&lt; already escaped &gt;",
            "\u{0}0\u{0}<x>",
            "*_`[(<\"'&'\">)]`_*",
            "```unterminated <fence>",
        ];
        for input in inputs {
            assert_injection_safe(input);
        }
    }

    #[test]
    fn test_rerendering_output_creates_no_new_constructs() {
        let first = render("# Title\n**bold** [a](https://x.y)\n- item");
        let second = render(&first);
        assert_injection_safe(&first);
        assert!(!strip_constructs(&second).contains('<'));
        // Every tag from the first pass is now inert text.
        assert!(second.contains("&lt;h1&gt;Title&lt;/h1&gt;"));
        assert!(!second.contains("<strong>"));
        assert!(!second.contains("<a "));
    }

    // ========================================================================
    // Individual stages
    // ========================================================================

    #[test]
    fn test_stage_order() {
        let names: Vec<_> = STAGES.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "normalize",
                "fenced-code",
                "escape",
                "headings",
                "emphasis",
                "inline-code",
                "links",
                "lists",
                "paragraphs",
                "splice"
            ]
        );
    }

    #[test]
    fn test_fenced_code_stage_sets_block_aside() {
        let buffer = extract_fenced_code(RenderBuffer::new("a```<b>```c"));
        assert_eq!(buffer.block_count(), 1);
        assert!(!buffer.text.contains("<b>"));
        assert!(buffer.text.starts_with("a\n"));
        assert!(buffer.text.ends_with("\nc"));
    }

    #[test]
    fn test_escape_stage_leaves_slots_alone() {
        let buffer = escape_text(extract_fenced_code(RenderBuffer::new("```x```<")));
        let spliced = splice_fragments(buffer);
        assert_eq!(spliced.text, "\n<pre><code>x</code></pre>\n&lt;");
    }

    #[test]
    fn test_heading_stage_most_specific_first() {
        let buffer = rewrite_headings(RenderBuffer::new("### a\n## b\n# c\n#### d"));
        assert_eq!(
            buffer.text,
            "<h3>a</h3>\n<h2>b</h2>\n<h1>c</h1>\n<h3># d</h3>"
        );
    }

    #[test]
    fn test_emphasis_stage_does_not_double_match_strong() {
        let buffer = rewrite_emphasis(RenderBuffer::new("**x**"));
        assert_eq!(buffer.text, "<strong>x</strong>");

        let buffer = rewrite_emphasis(RenderBuffer::new("***x***"));
        assert_eq!(buffer.text, "<strong><em>x</em></strong>");
    }

    #[test]
    fn test_inline_code_stage_counts_spans() {
        let buffer = extract_inline_code(RenderBuffer::new("`a` and `b`"));
        assert_eq!(buffer.inline_count(), 2);
    }

    #[test]
    fn test_list_stage_requires_whitespace_after_dash() {
        let buffer = group_lists(RenderBuffer::new("-a\n- b\n---"));
        assert_eq!(buffer.text, "-a\n<ul><li>b</li></ul>\n---");
    }

    #[test]
    fn test_safe_href() {
        assert_eq!(safe_href("https://example.com"), "https://example.com");
        assert_eq!(safe_href(" HTTP://EXAMPLE.COM "), "HTTP://EXAMPLE.COM");
        assert_eq!(safe_href("mailto:someone@example.com"), "mailto:someone@example.com");
        assert_eq!(safe_href("javascript:alert(1)"), "#");
        assert_eq!(safe_href("data:text/html,hi"), "#");
        assert_eq!(safe_href("httpfoo"), "#");
        assert_eq!(safe_href("https://"), "#");
        assert_eq!(safe_href("/relative/path"), "#");
    }

    #[test]
    fn test_render_is_reentrant() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || render(&format!("# Title {i}\n**b**"))))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(
                handle.join().unwrap(),
                format!("<h1>Title {i}</h1><p><strong>b</strong></p>")
            );
        }
    }
}
