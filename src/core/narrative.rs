use crate::error::GuideError;
use crate::models::{Narrative, PlaceRecord};
use crate::services::{ChatMessage, CompletionClient};

/// Label used when none of a place's types has a Japanese label
pub const FALLBACK_CATEGORY: &str = "施設";

/// Shown instead of a rating for unrated places
pub const UNRATED: &str = "未評価";

/// Persona and style rules for the guide
pub const SYSTEM_PROMPT: &str = "あなたは最高の観光ガイドです。
以下のような特徴を踏まえて説明してください：
- 丁寧な話し方
- 相手が知りたいことをわかりやすく伝える
- その場所の特徴や魅力を分かりやすく伝える
- 具体的で実用的な情報の提供
- ポジティブながらも正直な評価
- 時間帯や状況に応じた適切なアドバイス
- 300文字以内に説明してください
- 施設の種類に応じた適切な説明と推奨ポイント";

/// Japanese label for a Google place type
pub fn category_label(place_type: &str) -> Option<&'static str> {
    let label = match place_type {
        "school" => "学校",
        "restaurant" => "飲食店",
        "cafe" => "カフェ",
        "tourist_attraction" => "観光スポット",
        "park" => "公園",
        "museum" => "博物館",
        "shopping_mall" => "ショッピングモール",
        "bar" => "バー",
        "bakery" => "ベーカリー",
        "meal_takeaway" => "テイクアウト",
        "lodging" => "宿泊施設",
        "library" => "図書館",
        "art_gallery" => "美術館",
        "aquarium" => "水族館",
        "zoo" => "動物園",
        "amusement_park" => "遊園地",
        "movie_theater" => "映画館",
        "night_club" => "ナイトクラブ",
        "spa" => "スパ",
        "gym" => "ジム",
        "book_store" => "書店",
        "clothing_store" => "衣料品店",
        "department_store" => "百貨店",
        "supermarket" => "スーパーマーケット",
        "convenience_store" => "コンビニエンスストア",
        "train_station" => "駅",
        "place_of_worship" => "寺社・礼拝所",
        _ => return None,
    };
    Some(label)
}

/// Labels for the place's types, in the place's own order; unmapped types are dropped
pub fn localized_categories(types: &[String]) -> Vec<&'static str> {
    types.iter().filter_map(|t| category_label(t)).collect()
}

/// Deterministic user prompt for a place
pub fn build_prompt(place: &PlaceRecord) -> String {
    let labels = localized_categories(&place.types);
    let primary = labels.first().copied().unwrap_or(FALLBACK_CATEGORY);
    let joined = if labels.is_empty() {
        FALLBACK_CATEGORY.to_string()
    } else {
        labels.join(", ")
    };
    let rating = place
        .rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| UNRATED.to_string());
    let name = &place.name;

    format!(
        "以下の情報に基づいて、{primary}「{name}」について魅力的な説明を作成してください：

ユーザーが読みやすいようにその文が終わったら、1行下に下がって新しい文を作成してください。

施設名: {name}
種類: {joined}
住所: {address}
評価: {rating}（{count}件の評価）
営業状況: {status}


文章の始まりは「{name}はいかがですか？」
その後の文は簡潔に情報をまとめて、丁寧な言葉遣いで話してください。文章の最後は{name}の住所を教えてください",
        address = place.vicinity,
        count = place.user_ratings_total,
        status = place.open_status().label(),
    )
}

/// Ask the completion service to describe the place
pub async fn generate_narrative(
    completion: &CompletionClient,
    place: &PlaceRecord,
) -> Result<Narrative, GuideError> {
    tracing::debug!("応答生成開始: place_id={}, name={}", place.place_id, place.name);

    let messages = [
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(build_prompt(place)),
    ];

    let text = completion.complete(&messages).await.map_err(|e| {
        tracing::error!("Completion failed for {}: {}", place.place_id, e);
        GuideError::from(e)
    })?;

    let narrative = Narrative::new(text);
    tracing::debug!("生成された応答: {}", narrative.collapsed());

    Ok(narrative)
}
