//! Pure formatting helpers for the presentation layer.
//!
//! Everything user-visible here is Spanish, matching the site copy. No
//! business logic: these functions translate already-computed values into
//! display text and CSS hooks.

use crate::schedule::ArrivalStatus;

/// Human wait-time text: "Ya llegó", "1 minuto", "2 horas 5 minutos"…
pub fn format_minutes(minutes: i64) -> String {
    if minutes <= 0 {
        return "Ya llegó".to_string();
    }
    if minutes == 1 {
        return "1 minuto".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} minutos");
    }

    let hours = minutes / 60;
    let rest = minutes % 60;
    let hours_text = if hours == 1 {
        "1 hora".to_string()
    } else {
        format!("{hours} horas")
    };

    match rest {
        0 => hours_text,
        1 => format!("{hours_text} 1 minuto"),
        _ => format!("{hours_text} {rest} minutos"),
    }
}

/// Coarse urgency buckets for coloring the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// Zero or fewer minutes left.
    Arrived,
    /// Five minutes or less.
    Imminent,
    /// Fifteen minutes or less.
    Soon,
    /// Anything further out.
    Distant,
}

impl StatusCategory {
    pub fn from_minutes(minutes: i64) -> Self {
        if minutes <= 0 {
            StatusCategory::Arrived
        } else if minutes <= 5 {
            StatusCategory::Imminent
        } else if minutes <= 15 {
            StatusCategory::Soon
        } else {
            StatusCategory::Distant
        }
    }

    /// CSS utility class for the countdown text.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusCategory::Arrived => "text-red-600",
            StatusCategory::Imminent => "text-green-600",
            StatusCategory::Soon => "text-yellow-600",
            StatusCategory::Distant => "text-gray-600",
        }
    }
}

/// Headline message for a forecast.
pub fn status_message(status: ArrivalStatus, minutes: i64) -> &'static str {
    match status {
        ArrivalStatus::Approaching => "Próximo a llegar",
        ArrivalStatus::Upcoming => {
            if minutes <= 15 {
                "Viene en camino"
            } else {
                "Programado"
            }
        }
        ArrivalStatus::NoService => "No hay más servicios hoy",
    }
}

/// Format centavos as Argentine pesos: 276500 → "$ 2.765,00".
pub fn format_pesos(centavos: u32) -> String {
    let pesos = centavos / 100;
    let cents = centavos % 100;

    let digits = pesos.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("$ {grouped},{cents:02}")
}

/// Format a travel offset in seconds as "HH:MM:SS".
pub fn format_offset(seconds: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}
