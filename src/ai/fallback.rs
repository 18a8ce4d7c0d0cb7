//! Canned messages served when no AI backend is available
//!
//! Three fixed messages per tone. Used in place of a generated reply when the
//! backend has no API key or the upstream call fails.

use super::tone::Tone;
use crate::locale::Locale;

pub type FallbackMessages = [&'static str; 3];

const EMOTIONAL_JA: FallbackMessages = [
    "いつもありがとう、心から感謝💖",
    "あなたに出会えて幸せです✨",
    "特別なあなたへ、愛を込めて🌸",
];
const FUNNY_JA: FallbackMessages = [
    "また一つ歳とったね😂🎂",
    "いつも笑わせてくれてサンキュー🤣",
    "プレゼントより私が最高のギフト！😎",
];
const FORMAL_JA: FallbackMessages = [
    "心よりお祝い申し上げます🎊",
    "ご健勝をお祈りいたします🙏",
    "日頃の感謝を込めて贈ります✨",
];

const EMOTIONAL_EN: FallbackMessages = [
    "Thank you always, from the bottom of my heart💖",
    "I'm so happy to have met you✨",
    "To someone special, with love🌸",
];
const FUNNY_EN: FallbackMessages = [
    "Another year older, huh😂🎂",
    "Thanks for always making me laugh🤣",
    "Forget the present, I'm the best gift!😎",
];
const FORMAL_EN: FallbackMessages = [
    "Please accept my heartfelt congratulations🎊",
    "Wishing you the very best of health🙏",
    "Sent with gratitude for all you do✨",
];

const EMOTIONAL_VI: FallbackMessages = [
    "Cảm ơn bạn, từ tận đáy lòng💖",
    "Thật hạnh phúc khi được gặp bạn✨",
    "Gửi người đặc biệt, với tất cả yêu thương🌸",
];
const FUNNY_VI: FallbackMessages = [
    "Lại thêm một tuổi rồi nhé😂🎂",
    "Cảm ơn vì luôn làm mình cười🤣",
    "Quà gì chứ, mình mới là món quà tuyệt nhất!😎",
];
const FORMAL_VI: FallbackMessages = [
    "Xin gửi lời chúc mừng chân thành nhất🎊",
    "Kính chúc quý vị dồi dào sức khỏe🙏",
    "Gửi tặng cùng lòng biết ơn sâu sắc✨",
];

/// The canned messages for a tone
pub fn fallback_messages(tone: Tone, locale: Locale) -> &'static FallbackMessages {
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
