//! User-facing copy for the quiz screens.

pub const APP_TITLE: &str = "Школа Безопасности 🎓";
pub const APP_SUBTITLE: &str = "Учись правилам поведения в чрезвычайных ситуациях!";
pub const START_GAME: &str = "Начать игру";

pub const HOW_TO_PLAY_TITLE: &str = "✨ Как играть?";
pub const HOW_TO_PLAY_STEPS: [(&str, &str); 3] = [
    ("1️⃣", "Выбери ситуацию: наводнение или пожар"),
    ("2️⃣", "Читай вопрос и выбирай правильный ответ"),
    ("3️⃣", "За каждый правильный ответ получай 10 баллов!"),
];

pub const BACK_TO_MENU: &str = "В меню";
pub const NEXT_QUESTION: &str = "Следующий вопрос";
pub const FINISH_GAME: &str = "Завершить игру";
pub const PRAISE: &str = "🎉 Молодец!";
pub const REMEMBER: &str = "💡 Запомни:";
pub const HINT: &str = "💡 Подсказка: читай внимательно и думай о безопасности!";
pub const DISMISS: &str = "Закрыть";
pub const LOAD_FAILED: &str = "Не удалось загрузить вопросы";

#[must_use]
pub fn score_label(score: u32) -> String {
    format!("{score} баллов")
}

#[must_use]
pub fn question_counter(number: usize, total: usize) -> String {
    format!("Вопрос {number} из {total}")
}

#[must_use]
pub fn progress_label(percent: u32) -> String {
    format!("{percent}% пройдено")
}

/// Letter shown next to an option: A, B, C...
#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_letters_start_at_a() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(2), 'C');
        assert_eq!(option_letter(25), 'Z');
        assert_eq!(option_letter(26), '?');
        assert_eq!(option_letter(1_000), '?');
    }

    #[test]
    fn counters_interpolate_numbers() {
        assert_eq!(score_label(20), "20 баллов");
        assert_eq!(question_counter(2, 3), "Вопрос 2 из 3");
        assert_eq!(progress_label(67), "67% пройдено");
    }
}
