use std::sync::{Mutex, MutexGuard, PoisonError};

use ::serde::{Deserialize, Serialize};

/// одно внеклассное занятие и его список записавшихся
#[derive(Debug)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// email'ы в порядке записи
    participants: Mutex<Vec<String>>,
}

impl Activity {
    pub fn new<I, P>(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: I,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Mutex::new(participants.into_iter().map(Into::into).collect()),
        }
    }

    /// блокирует список записавшихся
    ///
    /// отравленный мьютекс забираем как есть: каждая мутация списка это один push или remove
    pub fn roster(&self) -> MutexGuard<'_, Vec<String>> {
        self.participants
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn view(&self) -> ActivityView {
        ActivityView {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.roster().clone(),
        }
    }
}

/// снимок занятия, отдаваемый наружу через `GET /activities`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// снимок всего реестра, сериализуется в JSON-объект `имя -> занятие` в порядке сидирования
#[derive(Debug, Clone, Default)]
pub struct Activities(pub Vec<(String, ActivityView)>);

impl Activities {
    pub fn get(&self, name: &str) -> Option<&ActivityView> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

impl Serialize for Activities {
    fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, view)| (name, view)))
    }
}

/// стартовый набор занятий
pub fn seed() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john@mergington.edu", "olivia@mergington.edu"],
        ),
        Activity::new(
            "Basketball Team",
            "Practice drills and compete in inter-school basketball games",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            ["james@mergington.edu"],
        ),
        Activity::new(
            "Tennis Club",
            "Develop tennis skills and play friendly matches",
            "Tuesdays and Saturdays, 10:00 AM - 11:30 AM",
            10,
            ["lucas@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Act, direct and stage school theater productions",
            "Thursdays, 4:00 PM - 6:00 PM",
            25,
            ["ava@mergington.edu", "mia@mergington.edu"],
        ),
        Activity::new(
            "Art Studio",
            "Explore painting, drawing and sculpture",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
            ["isabella@mergington.edu"],
        ),
        Activity::new(
            "Science Club",
            "Run hands-on experiments and prepare for science fairs",
            "Fridays, 2:00 PM - 3:30 PM",
            16,
            ["ethan@mergington.edu"],
        ),
        Activity::new(
            "Debate Team",
            "Sharpen public speaking and argumentation skills",
            "Tuesdays, 4:00 PM - 5:30 PM",
            12,
            ["liam@mergington.edu", "charlotte@mergington.edu"],
        ),
    ]
}
