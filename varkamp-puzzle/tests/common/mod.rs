//! Shared fixtures for puzzle tests.

#![allow(dead_code)]

use varkamp_puzzle::{AnswerValue, MagicCell, MagicSquare, PuzzleDefinition, PuzzleKind};

/// A manifest covering every puzzle type.
pub const SAMPLE_MANIFEST: &str = r#"{
  "puzzles": [
    { "type": "name",   "prompt": "Vad heter lagets maskot?", "hint": "Ett djur" },
    { "type": "text",   "prompt": "Huvudstad?", "hint": "Vid Mälaren", "answer": "Stockholm" },
    { "type": "number", "prompt": "7 * 6?", "hint": "", "answer": 42 },
    { "type": "count",  "prompt": "Hur många ekar?", "img": "assets/img/oaks.jpg", "answer": "12" },
    { "type": "word",   "prompt": "Trädet", "answer": "Oak Tree" },
    { "type": "stego",  "prompt": "Vad döljer bilden?", "img": "assets/img/stego.png", "answer": "ekorre" },
    { "type": "audio",  "prompt": "Spela baklänges", "src": "assets/audio/rev.mp3", "answer": "Vår" },
    { "type": "prime",  "prompt": "Vänta in rätt minut", "hint": "2, 3, 5, 7..." },
    { "type": "morse",  "prompt": "Lyssna", "src": "assets/audio/morse.mp3", "answers": ["SOS", "s o s"] },
    { "type": "magic",  "prompt": "Fyll rutorna", "size": 3, "target": 15,
      "grid": [[2, "", 6], ["", 5, ""], [4, "", 8]] }
  ],
  "staticPages": {
    "var":  { "title": "Våren", "text": "Rad ett\nRad två", "icon": "assets/icons/var.png",
              "thumb": "assets/img/var-thumb.jpg", "full": "assets/img/var.jpg" },
    "help": { "title": "Hjälp", "text": "Ring domaren.", "icon": "assets/icons/help.png" }
  },
  "validNames": ["Ekorren", "  Rävis ", "uggla"]
}"#;

pub fn puzzle(kind: PuzzleKind) -> PuzzleDefinition {
    PuzzleDefinition {
        prompt: "prompt".to_string(),
        hint: None,
        img: None,
        src: None,
        kind,
    }
}

pub fn text(answer: impl Into<AnswerValue>) -> PuzzleDefinition {
    puzzle(PuzzleKind::Text {
        answer: answer.into(),
    })
}

/// The Lo Shu square with the corners and centre given.
pub fn lo_shu() -> MagicSquare {
    use MagicCell::{Blank, Given};
    MagicSquare {
        size: 3,
        target: 15,
        grid: vec![
            vec![Given(2), Blank, Given(6)],
            vec![Blank, Given(5), Blank],
            vec![Given(4), Blank, Given(8)],
        ],
    }
}

/// Blank-cell values completing [`lo_shu`].
pub const LO_SHU_BLANKS: [&str; 4] = ["7", "9", "1", "3"];
