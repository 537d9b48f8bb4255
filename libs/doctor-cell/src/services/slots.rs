use crate::models::Doctor;

/// Every `(day, time)` pair of the doctor's schedule as `"<day> <time>"`,
/// in schedule order then slot order.
pub fn available_slots(doctor: &Doctor) -> Vec<String> {
    doctor
        .schedule
        .iter()
        .flat_map(|day| day.slots.iter().map(move |time| format!("{} {}", day.day, time)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DoctorStatus, ScheduleDay};

    fn with_schedule(schedule: Vec<ScheduleDay>) -> Doctor {
        Doctor {
            id: "d1".to_string(),
            name: "Dr. Alice Smith".to_string(),
            specialization: "Cardiologist".to_string(),
            image: "/alice.jpg".to_string(),
            status: DoctorStatus::OnLeave,
            schedule,
        }
    }

    #[test]
    fn test_single_day() {
        let doctor = with_schedule(vec![ScheduleDay::new("Monday", &["09:00", "09:30"])]);
        assert_eq!(available_slots(&doctor), vec!["Monday 09:00", "Monday 09:30"]);
    }

    #[test]
    fn test_schedule_then_slot_order() {
        let doctor = with_schedule(vec![
            ScheduleDay::new("Tuesday", &["11:00", "11:30"]),
            ScheduleDay::new("Monday", &["09:00"]),
            ScheduleDay::new("Friday", &[]),
        ]);
        assert_eq!(
            available_slots(&doctor),
            vec!["Tuesday 11:00", "Tuesday 11:30", "Monday 09:00"]
        );
    }

    #[test]
    fn test_empty_schedule() {
        let doctor = with_schedule(vec![]);
        assert!(available_slots(&doctor).is_empty());
    }
}
