//! Day-of schedule formatting

use crate::models::DayOfEvent;

/// Format the schedule in start-time order, as given
pub fn format_schedule(events: &[DayOfEvent]) -> String {
    if events.is_empty() {
        return "No events scheduled.\n".to_string();
    }

    let time_width = events
        .iter()
        .map(|e| e.time_range().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    for event in events {
        output.push_str(&format!(
            "{:>time_width$}  {}",
            event.time_range(),
            event.title,
            time_width = time_width,
        ));
        if let Some(minutes) = event.duration_minutes {
            output.push_str(&format!(" ({} min)", minutes));
        }
        output.push('\n');

        let indent = " ".repeat(time_width + 2);
        if let Some(location) = &event.location {
            output.push_str(&format!("{}@ {}\n", indent, location));
        }
        if let Some(who) = &event.assigned_to {
            output.push_str(&format!("{}Owner: {}\n", indent, who));
        }
        if let Some(description) = &event.description {
            output.push_str(&format!("{}{}\n", indent, description));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_schedule() {
        let mut ceremony = DayOfEvent::new("Ceremony", NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        ceremony.end_time = NaiveTime::from_hms_opt(15, 30, 0);
        ceremony.duration_minutes = Some(30);
        ceremony.location = Some("Garden terrace".into());
        let dinner = DayOfEvent::new("Dinner", NaiveTime::from_hms_opt(18, 0, 0).unwrap());

        let output = format_schedule(&[ceremony, dinner]);
        assert!(output.contains("3:00 PM - 3:30 PM  Ceremony (30 min)"));
        assert!(output.contains("@ Garden terrace"));
        assert!(output.contains("6:00 PM  Dinner"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_schedule(&[]), "No events scheduled.\n");
    }
}
