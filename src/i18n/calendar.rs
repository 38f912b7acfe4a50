use super::Locale;
use chrono::{Datelike, NaiveDateTime, Timelike};

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const TR_MONTHS: [&str; 12] = [
    "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
];

// Indexed from Sunday.
const EN_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const TR_WEEKDAYS: [&str; 7] = ["Paz", "Pzt", "Sal", "Çar", "Per", "Cum", "Cmt"];

/// The menu bar clock text, `Fri, Oct 16 02:05 PM` or `16 Eki Cum 14:05`.
pub fn clock_text(locale: Locale, now: &NaiveDateTime) -> String {
    let weekday = now.weekday().num_days_from_sunday() as usize;
    let month = now.month0() as usize;

    return match locale {
        Locale::En => {
            let (is_pm, hour) = now.hour12();

            format!(
                "{}, {} {} {:02}:{:02} {}",
                EN_WEEKDAYS[weekday],
                EN_MONTHS[month],
                now.day(),
                hour,
                now.minute(),
                if is_pm { "PM" } else { "AM" }
            )
        }
        Locale::Tr => format!(
            "{} {} {} {:02}:{:02}",
            now.day(),
            TR_MONTHS[month],
            TR_WEEKDAYS[weekday],
            now.hour(),
            now.minute()
        ),
    };
}

#[cfg(test)]
mod tests {
    use super::clock_text;
    use crate::i18n::Locale;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        return NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap();
    }

    #[test]
    fn english_clock() {
        assert_eq!(
            clock_text(Locale::En, &at(2026, 10, 16, 14, 5)),
            "Fri, Oct 16 02:05 PM"
        );
        assert_eq!(
            clock_text(Locale::En, &at(2026, 1, 4, 0, 30)),
            "Sun, Jan 4 12:30 AM"
        );
    }

    #[test]
    fn turkish_clock() {
        assert_eq!(
            clock_text(Locale::Tr, &at(2026, 10, 16, 14, 5)),
            "16 Eki Cum 14:05"
        );
        assert_eq!(
            clock_text(Locale::Tr, &at(2026, 8, 5, 9, 0)),
            "5 Ağu Çar 09:00"
        );
    }
}
