use super::resolver::ResolvedRace;

/// Shown when no race is left in the catalog.
pub const SEASON_COMPLETE: &str = "🚫 Всі гонки вже завершились цього сезону.";

/// Reply to `/poll` when the current week has no race.
pub const NO_RACE_THIS_WEEK: &str = "🚫 Цього тижня немає гонки — опитування не буде.";

/// Greeting sent with the inline button on `/start`.
pub const START_PROMPT: &str = "Привіт! Натисни кнопку, щоб дізнатися про наступну гонку:";

/// Label of the inline button that reveals the next race.
pub const NEXT_RACE_BUTTON: &str = "🏎️ Показати наступну гонку";

/// Renders the next-race announcement.
///
/// The date is the catalog's original text, not a reformatted one.
pub fn format_race_info(race: Option<&ResolvedRace>) -> String {
    match race {
        None => SEASON_COMPLETE.to_string(),
        Some(race) => format!(
            "🏁 Наступна гонка: {}\n📍 {} ({})\n📅 Дата: {}\n🕔 Час: {}",
            race.name, race.circuit, race.location, race.date_str, race.time
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn monza() -> ResolvedRace {
        ResolvedRace {
            name: "Italian Grand Prix".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            date_str: "2024-09-01".to_string(),
            time: "13:00:00Z".to_string(),
            circuit: "Autodromo Nazionale di Monza".to_string(),
            location: "Monza, Italy".to_string(),
        }
    }

    #[test]
    fn test_format_season_complete() {
        assert_eq!(format_race_info(None), SEASON_COMPLETE);
    }

    #[test]
    fn test_format_has_four_lines_in_order() {
        let text = format_race_info(Some(&monza()));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "🏁 Наступна гонка: Italian Grand Prix",
                "📍 Autodromo Nazionale di Monza (Monza, Italy)",
                "📅 Дата: 2024-09-01",
                "🕔 Час: 13:00:00Z",
            ]
        );
    }
}
