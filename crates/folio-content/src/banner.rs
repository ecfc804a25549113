//! Block-letter banner for the home page hero.

/// Letter L (7 lines tall, 6 chars wide)
pub const LETTER_L: [&str; 7] = [
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██████",
];

/// Letter Y
pub const LETTER_Y: [&str; 7] = [
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

/// Letter E
pub const LETTER_E: [&str; 7] = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██████",
];

/// Build the 7-row `LYLE` banner.
pub fn build_name_banner() -> Vec<String> {
    let letters = [LETTER_L, LETTER_Y, LETTER_L, LETTER_E];
    let mut lines = Vec::with_capacity(7);

    for row in 0..7 {
        let mut line = String::new();
        for (i, letter) in letters.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(letter[row]);
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_seven_even_rows() {
        let lines = build_name_banner();
        assert_eq!(lines.len(), 7);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }
}
