use ::log::{info, warn};

use crate::activity::{self, Activities, Activity};

#[derive(Debug, PartialEq, Eq, ::thiserror::Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound(String),
    #[error("Participant not found in this activity")]
    ParticipantNotFound { activity: String, email: String },
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered { activity: String, email: String },
}

/// реестр занятий, живёт всё время работы процесса
///
/// набор занятий неизменен после создания, меняются только списки записавшихся
#[derive(Debug, Default)]
pub struct Registry {
    activities: Vec<Activity>,
}

impl Registry {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// реестр со стартовым набором занятий
    pub fn seeded() -> Self {
        Self::new(activity::seed())
    }

    fn find(&self, name: &str) -> Result<&Activity, RegistryError> {
        self.activities
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_ok()
    }

    pub fn get_all(&self) -> Activities {
        Activities(
            self.activities
                .iter()
                .map(|a| (a.name.clone(), a.view()))
                .collect(),
        )
    }

    /// записывает `email` на занятие `name`
    ///
    /// вместимость (`max_participants`) не проверяется, переполнение только логируется
    pub fn add_participant(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self.find(name)?;
        let mut roster = activity.roster();

        if roster.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadyRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        roster.push(email.to_string());
        info!("`{}` signed up for `{}` ({} participants)", email, name, roster.len());

        if roster.len() > activity.max_participants as usize {
            warn!(
                "`{}` is over capacity: {} participants, max {}",
                name,
                roster.len(),
                activity.max_participants
            );
        }

        Ok(())
    }

    pub fn remove_participant(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self.find(name)?;
        let mut roster = activity.roster();

        let idx = roster
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::ParticipantNotFound {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        roster.remove(idx);
        info!("`{}` removed from `{}` ({} participants)", email, name, roster.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::new(vec![
            Activity::new("Chess Club", "chess", "Fridays", 2, ["a@mergington.edu"]),
            Activity::new("Drama Club", "drama", "Thursdays", 5, Vec::<String>::new()),
        ])
    }

    #[test]
    fn get_all_keeps_seed_order() {
        let reg = registry();
        let names = reg
            .get_all()
            .0
            .into_iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>();

        assert_eq!(names, ["Chess Club", "Drama Club"]);
        assert!(reg.exists("Chess Club"));
        assert!(!reg.exists("chess club"));
    }

    #[test]
    fn signup_appends_in_order() {
        let reg = registry();
        reg.add_participant("Drama Club", "x@mergington.edu").unwrap();
        reg.add_participant("Drama Club", "y@mergington.edu").unwrap();

        let all = reg.get_all();
        assert_eq!(
            all.get("Drama Club").unwrap().participants,
            ["x@mergington.edu", "y@mergington.edu"]
        );
    }

    #[test]
    fn signup_twice_is_rejected() {
        let reg = registry();
        let err = reg
            .add_participant("Chess Club", "a@mergington.edu")
            .unwrap_err();

        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
        assert!(err.to_string().to_lowercase().contains("already signed up"));
        assert_eq!(reg.get_all().get("Chess Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn unknown_activity() {
        let reg = registry();

        assert_eq!(
            reg.add_participant("Nonexistent Activity", "a@mergington.edu"),
            Err(RegistryError::ActivityNotFound("Nonexistent Activity".into()))
        );
        assert_eq!(
            reg.remove_participant("Nonexistent Activity", "a@mergington.edu"),
            Err(RegistryError::ActivityNotFound("Nonexistent Activity".into()))
        );
    }

    #[test]
    fn remove_absent_participant() {
        let reg = registry();
        let err = reg
            .remove_participant("Drama Club", "nobody@mergington.edu")
            .unwrap_err();

        assert!(matches!(err, RegistryError::ParticipantNotFound { .. }));
        assert!(err.to_string().to_lowercase().contains("not found"));
    }

    #[test]
    fn remove_takes_single_entry() {
        let reg = registry();
        reg.add_participant("Chess Club", "b@mergington.edu").unwrap();
        reg.remove_participant("Chess Club", "a@mergington.edu").unwrap();

        assert_eq!(
            reg.get_all().get("Chess Club").unwrap().participants,
            ["b@mergington.edu"]
        );
    }

    // вместимость не ограничивает запись
    #[test]
    fn signup_past_capacity_is_accepted() {
        let reg = registry();
        reg.add_participant("Chess Club", "b@mergington.edu").unwrap();
        reg.add_participant("Chess Club", "c@mergington.edu").unwrap();

        let chess = reg.get_all().get("Chess Club").cloned().unwrap();
        assert_eq!(chess.participants.len(), 3);
        assert_eq!(chess.max_participants, 2);
    }

    #[test]
    fn concurrent_duplicate_signup_succeeds_once() {
        let registry = registry();
        let reg = &registry;

        let ok = std::thread::scope(|s| {
            let mut handles = Vec::new();
            for _ in 0..16 {
                handles.push(
                    s.spawn(move || reg.add_participant("Drama Club", "race@mergington.edu")),
                );
            }

            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(Result::is_ok)
                .count()
        });

        assert_eq!(ok, 1);
        assert_eq!(
            reg.get_all().get("Drama Club").unwrap().participants,
            ["race@mergington.edu"]
        );
    }

    #[test]
    fn seeded_registry_is_well_formed() {
        let reg = Registry::seeded();
        assert!(!reg.is_empty());

        for (name, view) in reg.get_all().0 {
            assert!(!view.description.is_empty(), "{name}");
            assert!(!view.schedule.is_empty(), "{name}");
            assert!(view.max_participants > 0, "{name}");
        }
    }
}
