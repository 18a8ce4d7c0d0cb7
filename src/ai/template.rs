//! Message template catalog
//!
//! Static tone × locale tables of message templates. Templates reference the
//! request fields with `{receiver}`, `{relationship}` and `{occasion}`; blank
//! fields are replaced by a localized placeholder so a rendered message never
//! has a gap in it.

use super::suggestion::GiftContext;
use super::tone::Tone;
use crate::locale::Locale;

/// Number of templates in every tone pool
pub const TEMPLATES_PER_TONE: usize = 5;

/// A single message template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub text: &'static str,
    /// Overrides the locale's receiver placeholder for this template
    pub receiver_fallback: Option<&'static str>,
}

/// Words used in place of blank request fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    pub receiver: &'static str,
    pub relationship: &'static str,
    pub occasion: &'static str,
}

const fn t(text: &'static str) -> Template {
    Template {
        text,
        receiver_fallback: None,
    }
}

const fn tr(text: &'static str, receiver_fallback: &'static str) -> Template {
    Template {
        text,
        receiver_fallback: Some(receiver_fallback),
    }
}

// =========================================================================
// Catalog
// =========================================================================

const PLACEHOLDERS_JA: Placeholders = Placeholders {
    receiver: "あなた",
    relationship: "友人",
    occasion: "誕生日",
};

const PLACEHOLDERS_EN: Placeholders = Placeholders {
    receiver: "you",
    relationship: "friend",
    occasion: "birthday",
};

const PLACEHOLDERS_VI: Placeholders = Placeholders {
    receiver: "bạn",
    relationship: "bạn bè",
    occasion: "sinh nhật",
};

const EMOTIONAL_JA: [Template; TEMPLATES_PER_TONE] = [
    tr("{receiver}へ、心からの感謝を込めて💖", "あなた"),
    t("いつも支えてくれてありがとう、{relationship}として誇りです✨"),
    t("{occasion}おめでとう！幸せが溢れますように🌸"),
    t("出会えたことに感謝、これからもずっと一緒にいたい💕"),
    tr("{receiver}の笑顔が私の宝物です🎁", "大切な人"),
];

const FUNNY_JA: [Template; TEMPLATES_PER_TONE] = [
    tr("{receiver}、また歳とったね！でも若く見えるよ😂", "あなた"),
    t("{occasion}だから、プレゼント期待しててね🎁💸"),
    t("{relationship}の義務として、笑わせに来ました🤣"),
    t("老けたけど、まだまだいける！ファイト💪😆"),
    tr("{receiver}がいると毎日が楽しい！サンキュー😎", "君"),
];

const FORMAL_JA: [Template; TEMPLATES_PER_TONE] = [
    tr("{receiver}様、心より{occasion}をお祝い申し上げます🎊", "○○"),
    t("{relationship}として、日頃の感謝を込めて贈ります🙏"),
    t("{occasion}を迎えられたこと、心よりお慶び申し上げます✨"),
    t("益々のご健勝とご多幸をお祈りいたします🌟"),
    t("これからも変わらぬご愛顧のほど、よろしくお願いいたします🎁"),
];

const EMOTIONAL_EN: [Template; TEMPLATES_PER_TONE] = [
    tr("To {receiver}, with heartfelt thanks 💖", "you"),
    t("Thank you for always being there. I'm proud to be your {relationship} ✨"),
    t("Happy {occasion}! May your days overflow with happiness 🌸"),
    t("Grateful we met, and I want to stay by your side always 💕"),
    tr("The smile of {receiver} is my greatest treasure 🎁", "a loved one"),
];

const FUNNY_EN: [Template; TEMPLATES_PER_TONE] = [
    tr("Hey {receiver}, another year older! Still looking young though 😂", "you"),
    t("It's your {occasion}, so I'm expecting a present too 🎁💸"),
    t("Reporting for duty as your {relationship}: making you laugh 🤣"),
    t("Older, sure, but still going strong! Keep it up 💪😆"),
    tr("Every day is fun with {receiver} around! Thanks 😎", "you"),
];

const FORMAL_EN: [Template; TEMPLATES_PER_TONE] = [
    tr(
        "Dear {receiver}, please accept my sincere congratulations on your {occasion} 🎊",
        "Sir or Madam",
    ),
    t("As your {relationship}, I send this with gratitude for all you do 🙏"),
    t("It is my pleasure to celebrate your {occasion} with you ✨"),
    t("Wishing you continued health and every happiness 🌟"),
    t("With sincere thanks for your continued kindness 🎁"),
];

const EMOTIONAL_VI: [Template; TEMPLATES_PER_TONE] = [
    tr("Gửi {receiver}, với lòng biết ơn chân thành 💖", "bạn"),
    t("Cảm ơn vì luôn ở bên, tôi tự hào là {relationship} của bạn ✨"),
    t("Chúc mừng {occasion}! Mong hạnh phúc luôn tràn đầy 🌸"),
    t("Biết ơn vì đã gặp nhau, mong mãi được bên nhau 💕"),
    tr("Nụ cười của {receiver} là báu vật của tôi 🎁", "người thân yêu"),
];

const FUNNY_VI: [Template; TEMPLATES_PER_TONE] = [
    tr("{receiver} lại thêm một tuổi rồi! Nhưng trông vẫn trẻ lắm 😂", "Bạn"),
    t("Vì là {occasion} nên chờ quà nhé 🎁💸"),
    t("Với tư cách là {relationship}, mình đến để chọc cười bạn 🤣"),
    t("Già thêm chút nhưng vẫn còn phong độ! Cố lên 💪😆"),
    tr("Có {receiver} mỗi ngày đều vui! Cảm ơn nhé 😎", "bạn"),
];

const FORMAL_VI: [Template; TEMPLATES_PER_TONE] = [
    tr("Kính gửi {receiver}, xin chân thành chúc mừng {occasion} 🎊", "Quý khách"),
    t("Với tư cách là {relationship}, xin gửi món quà cùng lòng biết ơn 🙏"),
    t("Xin trân trọng chúc mừng {occasion} của quý vị ✨"),
    t("Kính chúc sức khỏe dồi dào và nhiều hạnh phúc 🌟"),
    t("Rất mong tiếp tục nhận được sự ủng hộ của quý vị 🎁"),
];

/// The template pool for a tone, in catalog order
pub fn templates(tone: Tone, locale: Locale) -> &'static [Template; TEMPLATES_PER_TONE] {
    match (locale, tone) {
        (Locale::Ja, Tone::Emotional) => &EMOTIONAL_JA,
        (Locale::Ja, Tone::Funny) => &FUNNY_JA,
        (Locale::Ja, Tone::Formal) => &FORMAL_JA,
        (Locale::En, Tone::Emotional) => &EMOTIONAL_EN,
        (Locale::En, Tone::Funny) => &FUNNY_EN,
        (Locale::En, Tone::Formal) => &FORMAL_EN,
        (Locale::Vi, Tone::Emotional) => &EMOTIONAL_VI,
        (Locale::Vi, Tone::Funny) => &FUNNY_VI,
        (Locale::Vi, Tone::Formal) => &FORMAL_VI,
    }
}

pub fn placeholders(locale: Locale) -> &'static Placeholders {
    match locale {
        Locale::Ja => &PLACEHOLDERS_JA,
        Locale::En => &PLACEHOLDERS_EN,
        Locale::Vi => &PLACEHOLDERS_VI,
    }
}

// =========================================================================
// Rendering
// =========================================================================

impl Template {
    /// Substitute the request fields into this template
    ///
    /// Substitution is a single left-to-right pass, so braces inside user
    /// text are copied through verbatim. Unknown `{keys}` are left as-is.
    pub fn render(&self, context: &GiftContext, locale: Locale) -> String {
        let defaults = placeholders(locale);
        let receiver_fallback = self.receiver_fallback.unwrap_or(defaults.receiver);

        let mut out = String::with_capacity(self.text.len() + 32);
        let mut rest = self.text;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];

            let Some(end) = tail.find('}') else {
                rest = tail;
                break;
            };

            let value = match &tail[1..end] {
                "receiver" => non_blank(&context.receiver).unwrap_or(receiver_fallback),
                "relationship" => non_blank(&context.relationship).unwrap_or(defaults.relationship),
                "occasion" => non_blank(&context.occasion).unwrap_or(defaults.occasion),
                _ => &tail[..=end],
            };
            out.push_str(value);

            rest = &tail[end + 1..];
        }

        out.push_str(rest);
        out
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod template_tests;
