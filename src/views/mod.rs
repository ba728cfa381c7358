//! Server-rendered pages: landing page, search form, result and error pages.

use crate::models::{PlaceRecord, Recommendation};

/// Stylesheet served at `/static/style.css`
pub const STYLESHEET: &str = include_str!("../../static/style.css");

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape, then turn line breaks into `<br>`
pub fn nl2br(text: &str) -> String {
    text.lines()
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main class="container">
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

pub fn render_home() -> String {
    layout(
        "おでかけコンシェルジュ",
        r#"<h1>おでかけコンシェルジュ</h1>
<p>行きたい場所のキーワードとエリアを入力すると、AIガイドがおすすめのスポットをご紹介します。</p>
<p><a class="button" href="/search">スポットを探す</a></p>"#,
    )
}

pub fn render_search_form() -> String {
    layout(
        "スポット検索",
        r#"<h1>スポット検索</h1>
<form action="/results" method="get" class="search-form">
  <label>キーワード（必須）
    <input type="text" name="query" placeholder="例：カフェ、観光スポット" required maxlength="200">
  </label>
  <label>エリア
    <input type="text" name="location_name" placeholder="例：新宿区、葛飾区" maxlength="100">
  </label>
  <label class="checkbox">
    <input type="checkbox" name="open_now" value="true"> 営業中の施設のみ
  </label>
  <label>価格帯
    <select name="price_level">
      <option value="">指定なし</option>
      <option value="1">1（安価）</option>
      <option value="2">2</option>
      <option value="3">3</option>
      <option value="4">4（最高価）</option>
    </select>
  </label>
  <label>最低評価
    <input type="number" name="rating" min="0" max="5" step="0.1" placeholder="例：4.0">
  </label>
  <button type="submit">検索</button>
</form>"#,
    )
}

/// Only http(s) URLs from upstream data become links
pub fn is_web_url(value: &str) -> bool {
    reqwest::Url::parse(value.trim())
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn place_details(place: &PlaceRecord) -> String {
    let rating = place
        .rating
        .map(|r| format!("{:.1}（{}件の評価）", r, place.user_ratings_total))
        .unwrap_or_else(|| "未評価".to_string());

    let mut rows = vec![
        format!("<dt>住所</dt><dd>{}</dd>", escape_html(&place.vicinity)),
        format!("<dt>評価</dt><dd>{}</dd>", escape_html(&rating)),
        format!("<dt>営業状況</dt><dd>{}</dd>", place.open_status().label()),
    ];

    if let Some(level) = place.price_level {
        rows.push(format!("<dt>価格帯</dt><dd>{}</dd>", "¥".repeat(level.max(1) as usize)));
    }
    if let Some(website) = &place.website {
        let text = escape_html(website);
        if is_web_url(website) {
            rows.push(format!(
                r#"<dt>ウェブサイト</dt><dd><a href="{text}" target="_blank" rel="noopener noreferrer">{text}</a></dd>"#
            ));
        } else {
            rows.push(format!("<dt>ウェブサイト</dt><dd>{}</dd>", text));
        }
    }

    format!("<dl class=\"place-details\">{}</dl>", rows.join(""))
}

pub fn render_result(recommendation: &Recommendation) -> String {
    let place = &recommendation.place;
    let body = format!(
        r#"<h1>{name}</h1>
<p class="narrative">{narrative}</p>
{details}
<p><a href="/search">別のスポットを探す</a></p>"#,
        name = escape_html(&place.name),
        narrative = nl2br(recommendation.narrative.raw()),
        details = place_details(place),
    );

    layout(&place.name, &body)
}

pub fn render_error(message: &str) -> String {
    let body = format!(
        r#"<h1>エラーが発生しました</h1>
<p class="error">{}</p>
<p><a href="/search">検索画面に戻る</a></p>"#,
        escape_html(message)
    );

    layout("エラー", &body)
}
