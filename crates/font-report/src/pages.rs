//! HTML assembly for the review pages.
//!
//! Sample text is interpolated literally; nothing is escaped, so the pages
//! carry the exact Maithili strings the fonts are tested against.

use std::fmt::Write;

use mithila_glyph_shapes::{CONSONANTS, DEVANAGARI_SETS, DIGITS, VOWELS};

use crate::samples::{GREETING, SAMPLES};

/// The font family a page reviews, with the TTF files its `@font-face`
/// rules reference (relative to the page).
#[derive(Debug, Clone, Copy)]
pub struct ReportFonts<'a> {
    pub family: &'a str,
    pub regular_file: &'a str,
    pub bold_file: &'a str,
}

fn font_faces(fonts: &ReportFonts) -> String {
    format!(
        r#"        @font-face {{
            font-family: '{family}';
            src: url('{regular}') format('truetype');
            font-weight: normal;
        }}
        @font-face {{
            font-family: '{family}';
            src: url('{bold}') format('truetype');
            font-weight: bold;
        }}"#,
        family = fonts.family,
        regular = fonts.regular_file,
        bold = fonts.bold_file,
    )
}

fn showcase_row(out: &mut String, heading: &str, chars: &str) {
    let _ = writeln!(out, "        <h3>{heading}</h3>");
    let _ = writeln!(out, r#"        <div class="char-row">"#);
    for ch in chars.chars() {
        let _ = writeln!(out, r#"            <div class="char-cell">{ch}</div>"#);
    }
    let _ = writeln!(out, "        </div>");
}

/// The interactive tester page: statistics, character showcase, sample
/// cards, and a live-preview text area.
pub fn tester_page(fonts: &ReportFonts) -> String {
    let mut out = String::new();
    let total: usize = DEVANAGARI_SETS.iter().map(|set| set.len()).sum();

    let _ = writeln!(
        out,
        r#"<!DOCTYPE html>
<html lang="hi">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{family} Font Tester</title>
    <style>
{font_faces}
        body {{
            font-family: system-ui, Arial, sans-serif;
            margin: 0;
            padding: 20px;
            background: #1e3c72;
            color: #333;
        }}
        .container {{
            max-width: 1100px;
            margin: 0 auto;
            background: white;
            border-radius: 12px;
            padding: 30px;
        }}
        .header {{
            text-align: center;
            border-bottom: 3px solid #1e3c72;
            margin-bottom: 30px;
        }}
        .maithili-title {{
            font-family: '{family}', Arial, sans-serif;
            font-size: 36px;
            color: #2a5298;
            margin: 10px 0;
        }}
        .section {{
            background: #f8f9fa;
            border-radius: 10px;
            padding: 20px;
            margin: 20px 0;
        }}
        .stats {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
            gap: 15px;
        }}
        .stat {{
            text-align: center;
            background: white;
            border-radius: 8px;
            padding: 15px;
        }}
        .stat b {{
            display: block;
            font-size: 2em;
            color: #1e3c72;
        }}
        .char-row {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(70px, 1fr));
            gap: 8px;
        }}
        .char-cell {{
            font-family: '{family}', Arial, sans-serif;
            font-size: 24px;
            text-align: center;
            background: white;
            border: 2px solid #e0e0e0;
            border-radius: 8px;
            padding: 12px;
        }}
        .sample-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(380px, 1fr));
            gap: 16px;
        }}
        .sample-card {{
            background: white;
            border-left: 5px solid #1e3c72;
            border-radius: 8px;
            padding: 16px;
        }}
        .sample-category {{
            font-size: 12px;
            font-weight: bold;
            text-transform: uppercase;
            color: #1e3c72;
        }}
        .maithili-text {{
            font-family: '{family}', Arial, sans-serif;
            font-size: 22px;
            line-height: 1.6;
            margin: 8px 0;
        }}
        .translation {{
            font-size: 14px;
            font-style: italic;
            color: #666;
        }}
        .test-input {{
            width: 100%;
            min-height: 90px;
            font-family: '{family}', Arial, sans-serif;
            font-size: 24px;
            padding: 12px;
            margin: 12px 0;
        }}
        .controls button, .controls select {{
            margin: 4px;
            padding: 8px 14px;
        }}
        .download a {{
            display: inline-block;
            background: #1e3c72;
            color: white;
            padding: 12px 24px;
            border-radius: 8px;
            text-decoration: none;
            margin: 8px;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{family} Font Tester</h1>
            <div class="maithili-title">{greeting}</div>
            <p>Visual inspection page for the Maithili glyph prototypes</p>
        </div>
        <div class="section">
            <h2>Font Statistics</h2>
            <div class="stats">
                <div class="stat"><b>{total}</b>Characters</div>
                <div class="stat"><b>{vowels}</b>Vowels</div>
                <div class="stat"><b>{consonants}</b>Consonants</div>
                <div class="stat"><b>{digits}</b>Digits</div>
            </div>
        </div>
        <div class="section">
            <h2>Character Showcase</h2>"#,
        family = fonts.family,
        font_faces = font_faces(fonts),
        greeting = GREETING,
        total = total,
        vowels = VOWELS.len(),
        consonants = CONSONANTS.len(),
        digits = DIGITS.len(),
    );

    showcase_row(&mut out, "Vowels (स्वर)", &VOWELS.display_chars());
    showcase_row(&mut out, "Digits (संख्या)", &DIGITS.display_chars());

    let _ = writeln!(
        out,
        r#"        </div>
        <div class="section">
            <h2>Maithili Text Samples</h2>
            <div class="sample-grid">"#
    );

    for sample in SAMPLES {
        let _ = writeln!(
            out,
            r#"                <div class="sample-card">
                    <div class="sample-category">{category}</div>
                    <div class="maithili-text">{text}</div>
                    <div class="translation">{translation}</div>
                </div>"#,
            category = sample.category,
            text = sample.text,
            translation = sample.translation,
        );
    }

    let _ = writeln!(
        out,
        r#"            </div>
        </div>
        <div class="section">
            <h2>Interactive Testing</h2>
            <div class="controls">
                <button onclick="insertSample('{greeting}')">Greeting</button>
                <button onclick="insertSample('{vowel_row}')">Vowels</button>
                <button onclick="insertSample('{digit_row}')">Digits</button>
                <select onchange="changeFontSize(this.value)">
                    <option value="20">20px</option>
                    <option value="24" selected>24px</option>
                    <option value="28">28px</option>
                    <option value="32">32px</option>
                    <option value="36">36px</option>
                </select>
            </div>
            <textarea id="testInput" class="test-input">{greeting}</textarea>
            <div id="livePreview" class="maithili-text">{greeting}</div>
        </div>
        <div class="section download">
            <h2>Download Fonts</h2>
            <a href="{regular}" download>Download Regular</a>
            <a href="{bold}" download>Download Bold</a>
        </div>
    </div>
    <script>
        function insertSample(text) {{
            const input = document.getElementById('testInput');
            input.value = text;
            updatePreview();
        }}
        function changeFontSize(size) {{
            document.getElementById('testInput').style.fontSize = size + 'px';
            document.getElementById('livePreview').style.fontSize = size + 'px';
        }}
        function updatePreview() {{
            const input = document.getElementById('testInput');
            const preview = document.getElementById('livePreview');
            preview.textContent = input.value || '{greeting}';
        }}
        document.getElementById('testInput').addEventListener('input', updatePreview);
        updatePreview();
    </script>
</body>
</html>"#,
        greeting = GREETING,
        vowel_row = VOWELS.display_chars(),
        digit_row = DIGITS.display_chars(),
        regular = fonts.regular_file,
        bold = fonts.bold_file,
    );

    out
}

/// The static results page: character rows, sample texts, a system-font
/// comparison, and size/weight ladders.
pub fn results_page(fonts: &ReportFonts) -> String {
    let mut out = String::new();
    let total: usize = DEVANAGARI_SETS.iter().map(|set| set.len()).sum();

    let _ = writeln!(
        out,
        r#"<!DOCTYPE html>
<html lang="hi">
<head>
    <meta charset="UTF-8">
    <title>{family} Test Results</title>
    <style>
{font_faces}
        body {{
            font-family: Arial, sans-serif;
            margin: 20px;
            background: #f5f5f5;
        }}
        .block {{
            background: white;
            padding: 20px;
            margin: 20px 0;
            border-radius: 8px;
            border-left: 4px solid #28a745;
        }}
        .maithili-text {{
            font-family: '{family}', Arial, sans-serif;
            line-height: 1.8;
            margin: 10px 0;
        }}
        .system-font {{
            font-family: 'Noto Sans Devanagari', Arial, sans-serif;
        }}
        .comparison {{
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 20px;
        }}
        .test-large {{ font-size: 36px; }}
        .test-medium {{ font-size: 24px; }}
        .test-small {{ font-size: 18px; }}
    </style>
</head>
<body>
    <h1>{family} Test Results</h1>
    <div class="block">
        <h2>Basic Characters</h2>
        <h3>Vowels (स्वर)</h3>
        <div class="maithili-text test-large">{vowel_row}</div>
        <h3>Consonants (व्यञ्जन)</h3>
        <div class="maithili-text test-medium">{consonant_row}</div>
        <h3>Digits (संख्या)</h3>
        <div class="maithili-text test-large">{digit_row}</div>
    </div>
    <div class="block">
        <h2>Sample Text</h2>
        <div class="maithili-text test-medium">{greeting}</div>
        <div class="maithili-text test-small">हमरा सभकेँ अपन भाषाक संरक्षण करबाक चाही।</div>
        <div class="maithili-text test-medium" style="font-weight: bold;">मैथिली साहित्य आ संस्कृतिक धरोहर अछि।</div>
    </div>
    <div class="block">
        <h2>Font Comparison</h2>
        <div class="comparison">
            <div>
                <h4>{family}</h4>
                <div class="maithili-text test-medium">{greeting}</div>
            </div>
            <div>
                <h4>System Default</h4>
                <div class="maithili-text system-font test-medium">{greeting}</div>
            </div>
        </div>
    </div>
    <div class="block">
        <h2>Size Testing</h2>"#,
        family = fonts.family,
        font_faces = font_faces(fonts),
        greeting = GREETING,
        vowel_row = spaced(&VOWELS.display_chars()),
        consonant_row = spaced(&CONSONANTS.display_chars()),
        digit_row = DIGITS.display_chars(),
    );

    for size in [48, 36, 24, 18, 14] {
        let _ = writeln!(
            out,
            r#"        <div class="maithili-text" style="font-size: {size}px;">मैथिली ({size}px)</div>"#
        );
    }

    let _ = writeln!(
        out,
        r#"    </div>
    <div class="block">
        <h2>Weight Testing</h2>
        <div class="maithili-text test-large" style="font-weight: normal;">मैथिली भाषा (Normal)</div>
        <div class="maithili-text test-large" style="font-weight: bold;">मैथिली भाषा (Bold)</div>
    </div>
    <div class="block">
        <h2>Summary</h2>
        <p><strong>Font Family:</strong> {family}</p>
        <p><strong>Characters Tested:</strong> {total} Devanagari characters</p>
        <p><strong>Weights:</strong> Regular, Bold</p>
        <p><strong>Unicode Coverage:</strong> U+0905&ndash;U+096F (Devanagari)</p>
    </div>
</body>
</html>"#,
        family = fonts.family,
        total = total,
    );

    out
}

fn spaced(chars: &str) -> String {
    let mut spaced = String::new();
    for (i, ch) in chars.chars().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    spaced
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONTS: ReportFonts = ReportFonts {
        family: "Mithila Sans",
        regular_file: "MithilaSans-Regular.ttf",
        bold_file: "MithilaSans-Bold.ttf",
    };

    #[test]
    fn tester_page_embeds_the_greeting_unescaped() {
        let html = tester_page(&FONTS);
        assert!(html.contains("मैथिली भाषामे स्वागत छै।"));
        assert!(!html.contains("&#x92E;"));
    }

    #[test]
    fn tester_page_references_both_fonts() {
        let html = tester_page(&FONTS);
        assert!(html.contains("url('MithilaSans-Regular.ttf')"));
        assert!(html.contains("url('MithilaSans-Bold.ttf')"));
        assert_eq!(html.matches("@font-face").count(), 2);
    }

    #[test]
    fn tester_page_shows_every_sample_category() {
        let html = tester_page(&FONTS);
        for sample in crate::samples::SAMPLES {
            assert!(html.contains(sample.category), "missing {}", sample.category);
            assert!(html.contains(sample.text));
        }
    }

    #[test]
    fn results_page_embeds_the_greeting_and_character_rows() {
        let html = results_page(&FONTS);
        assert!(html.contains("मैथिली भाषामे स्वागत छै।"));
        assert!(html.contains("अ आ इ ई उ ऊ ए ऐ ओ औ"));
        assert!(html.contains("०१२३४५६७८९"));
    }

    #[test]
    fn pages_declare_the_document_language() {
        assert!(tester_page(&FONTS).starts_with("<!DOCTYPE html>"));
        assert!(tester_page(&FONTS).contains(r#"<html lang="hi">"#));
        assert!(results_page(&FONTS).contains(r#"<html lang="hi">"#));
    }
}
