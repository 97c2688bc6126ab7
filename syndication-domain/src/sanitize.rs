//! 纯文本清洗
//!
//! 将 guid 等外部字符串清洗为可安全写入日志/展示的纯文本：
//! 去除 `<script>`/`<style>` 块及其内容、剥离标签、转义孤立的 `<`、
//! 折叠空白并剔除百分号编码的字节。
//!
use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*?>.*?</script>").expect("valid regex"));
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*?>.*?</style>").expect("valid regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t ]+").expect("valid regex"));
static OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)%[a-f0-9]{2}").expect("valid regex"));
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("valid regex"));

/// 清洗为单行纯文本
pub fn sanitize_text_field(input: &str) -> String {
    let mut text = input.to_string();

    if text.contains('<') {
        text = escape_lone_less_than(&text);
        text = SCRIPT_BLOCK.replace_all(&text, "").into_owned();
        text = STYLE_BLOCK.replace_all(&text, "").into_owned();
        text = TAG.replace_all(&text, "").trim().to_string();
    }

    text = WHITESPACE.replace_all(&text, " ").trim().to_string();

    let mut found = false;
    while let Some(m) = OCTET.find(&text) {
        let octet = m.as_str().to_string();
        text = text.replace(&octet, "");
        found = true;
    }
    if found {
        text = SPACES.replace_all(&text, " ").trim().to_string();
    }

    text
}

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").expect("valid regex")
});

// `<` 之后先遇到 `>` 视为标签原样保留；否则从 `<` 到下一个 `<`（或结尾）的整段按 HTML 转义
fn escape_lone_less_than(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail[1..].find(['<', '>']).map(|j| j + 1);
        match end {
            Some(j) if tail.as_bytes()[j] == b'>' => {
                out.push_str(&tail[..=j]);
                rest = &tail[j + 1..];
            }
            Some(j) => {
                out.push_str(&escape_html(&tail[..j]));
                rest = &tail[j..];
            }
            None => {
                out.push_str(&escape_html(tail));
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

// 已存在的实体不重复编码
fn escape_html(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len() + 8);
    for (i, ch) in fragment.char_indices() {
        match ch {
            '&' if ENTITY.is_match(&fragment[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}
