//! Repositories for tasks, vendors, moodboards and day-of events

use crate::error::WedplanError;
use crate::models::{
    DayOfEvent, EventId, Moodboard, MoodboardId, TaskId, TimelineTask, Vendor, VendorId,
};

use super::collection::JsonCollection;

impl_record!(TimelineTask, TaskId);
impl_record!(Vendor, VendorId);
impl_record!(Moodboard, MoodboardId);
impl_record!(DayOfEvent, EventId);

pub type TaskRepository = JsonCollection<TimelineTask>;
pub type VendorRepository = JsonCollection<Vendor>;
pub type MoodboardRepository = JsonCollection<Moodboard>;
pub type EventRepository = JsonCollection<DayOfEvent>;

impl TaskRepository {
    pub fn get_by_title(&self, title: &str) -> Result<Option<TimelineTask>, WedplanError> {
        let title = title.trim();
        self.find_by(|t| t.title.eq_ignore_ascii_case(title))
    }
}

impl VendorRepository {
    pub fn get_by_name(&self, name: &str) -> Result<Option<Vendor>, WedplanError> {
        let name = name.trim();
        self.find_by(|v| v.name.eq_ignore_ascii_case(name))
    }
}

impl MoodboardRepository {
    pub fn get_by_name(&self, name: &str) -> Result<Option<Moodboard>, WedplanError> {
        let name = name.trim();
        self.find_by(|b| b.name.eq_ignore_ascii_case(name))
    }
}

impl EventRepository {
    /// Events in running order: start time, then insertion order
    pub fn get_schedule(&self) -> Result<Vec<DayOfEvent>, WedplanError> {
        let mut events = self.get_all()?;
        events.sort_by_key(|e| e.start_time);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_of::parse_time;
    use crate::models::Category;
    use tempfile::TempDir;

    #[test]
    fn test_schedule_is_time_ordered() {
        let temp = TempDir::new().unwrap();
        let repo = EventRepository::new(temp.path().join("events.json"));
        repo.upsert(DayOfEvent::new("Ceremony", parse_time("17:00").unwrap()))
            .unwrap();
        repo.upsert(DayOfEvent::new("Hair & Makeup", parse_time("12:00").unwrap()))
            .unwrap();
        repo.upsert(DayOfEvent::new("First Look", parse_time("15:00").unwrap()))
            .unwrap();

        let titles: Vec<String> = repo
            .get_schedule()
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Hair & Makeup", "First Look", "Ceremony"]);
    }

    #[test]
    fn test_name_lookups() {
        let temp = TempDir::new().unwrap();
        let vendors = VendorRepository::new(temp.path().join("vendors.json"));
        vendors.upsert(Vendor::new("Bloom & Wild", Category::Flowers)).unwrap();
        assert!(vendors.get_by_name("bloom & wild").unwrap().is_some());

        let boards = MoodboardRepository::new(temp.path().join("boards.json"));
        boards.upsert(Moodboard::new("Florals")).unwrap();
        assert!(boards.get_by_name("FLORALS").unwrap().is_some());
        assert!(boards.get_by_name("Cakes").unwrap().is_none());

        let tasks = TaskRepository::new(temp.path().join("tasks.json"));
        tasks.upsert(TimelineTask::new("Write vows", Category::Other)).unwrap();
        assert!(tasks.get_by_title("write VOWS").unwrap().is_some());
    }
}
