//! Maithili text samples shown on the review pages.

/// One sample: a category label, the literal Maithili text, and an English
/// translation. Pure display data.
#[derive(Debug, Clone, Copy)]
pub struct TextSample {
    pub category: &'static str,
    pub text: &'static str,
    pub translation: &'static str,
}

/// The greeting embedded verbatim in every review page.
pub const GREETING: &str = "मैथिली भाषामे स्वागत छै।";

pub const SAMPLES: &[TextSample] = &[
    TextSample {
        category: "Basic Greeting",
        text: GREETING,
        translation: "Welcome to Maithili language.",
    },
    TextSample {
        category: "Self Introduction",
        text: "हमर नाम विक्रम अछि। हम मैथिली बाजैत छी।",
        translation: "My name is Vikram. I speak Maithili.",
    },
    TextSample {
        category: "Family",
        text: "हमर परिवारमे चारि गोटे अछि। माता, पिता, भाई आ हम।",
        translation: "There are four people in my family. Mother, father, brother and me.",
    },
    TextSample {
        category: "Daily Routine",
        text: "हम सबेरे उठैत छी। स्नान करैत छी। खाना खाइत छी।",
        translation: "I wake up in the morning. I take a bath. I eat food.",
    },
    TextSample {
        category: "Numbers & Date",
        text: "आजुक दिनांक ७ अक्टूबर २०२५ अछि। समय दुपहर १२ बजे अछि।",
        translation: "Today's date is 7 October 2025. The time is 12 noon.",
    },
    TextSample {
        category: "Weather",
        text: "आइ मौसम बड्ड नीक अछि। तापमान २५ डिग्री अछि।",
        translation: "Today the weather is very nice. The temperature is 25 degrees.",
    },
    TextSample {
        category: "Education",
        text: "हम विद्यालयमे पढ़ैत छी। मैथिली हमर प्रिय विषय अछि।",
        translation: "I study in school. Maithili is my favorite subject.",
    },
    TextSample {
        category: "Culture",
        text: "मैथिली साहित्य बहुत समृद्ध अछि। हमरा अपन संस्कृति पर गर्व अछि।",
        translation: "Maithili literature is very rich. We are proud of our culture.",
    },
    TextSample {
        category: "Poetry",
        text: "मैथिली भाषाक माधुर्य, हृदयमे बसल रहै छै।",
        translation: "The sweetness of Maithili language resides in the heart.",
    },
    TextSample {
        category: "Technology",
        text: "आजुक युगमे तकनीक बहुत महत्वपूर्ण अछि। कंप्यूटर सभक जीवन सरल बना देलक।",
        translation: "Technology is very important in today's era. Computers have made everyone's life simple.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_samples_with_unique_categories() {
        assert_eq!(SAMPLES.len(), 10);
        let mut categories: Vec<_> = SAMPLES.iter().map(|s| s.category).collect();
        categories.sort_unstable();
        categories.dedup();
        assert_eq!(categories.len(), 10);
    }

    #[test]
    fn greeting_is_the_first_sample() {
        assert_eq!(SAMPLES[0].text, GREETING);
    }
}
