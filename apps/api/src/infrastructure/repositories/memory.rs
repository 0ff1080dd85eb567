// In-memory adapter for every repository port
// Used by the test suite and when no DATABASE_URL is configured

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::matches::MatchDocument;
use crate::domain::player::Player;
use crate::domain::repositories::{
    MatchRepository, PlayerRepository, RegistrationRepository, RepositoryError, RepositoryResult,
    SessionRepository, TeamRepository, TrialRepository, User, UserRepository,
};
use crate::domain::sessions::{Registration, TrialSession};
use crate::domain::team::{SeasonTotals, Team};
use crate::domain::trial::TrialSignup;
use crate::domain::user::Email;

/// Process-local store; collections keep insertion order
#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    teams: RwLock<Vec<Team>>,
    players: RwLock<Vec<Player>>,
    matches: RwLock<Vec<MatchDocument>>,
    sessions: RwLock<Vec<TrialSession>>,
    registrations: RwLock<Vec<Registration>>,
    trials: RwLock<Vec<TrialSignup>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Insert or replace by id
fn upsert<T: Clone>(items: &mut Vec<T>, item: &T, id_of: impl Fn(&T) -> Uuid) {
    let id = id_of(item);
    match items.iter_mut().find(|existing| id_of(existing) == id) {
        Some(slot) => *slot = item.clone(),
        None => items.push(item.clone()),
    }
}

fn remove<T>(
    items: &mut Vec<T>,
    entity: &'static str,
    id: Uuid,
    id_of: impl Fn(&T) -> Uuid,
) -> RepositoryResult<()> {
    let before = items.len();
    items.retain(|item| id_of(item) != id);
    if items.len() == before {
        return Err(RepositoryError::not_found(entity, id));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> RepositoryResult<Uuid> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.email.matches_ignore_case(user.email.as_str()))
        {
            return Err(RepositoryError::Conflict(
                "Email already registered".to_string(),
            ));
        }
        let id = user.id;
        users.push(user);
        Ok(id)
    }

    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email.matches_ignore_case(email.as_str()))
            .cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let mut users = self.users.read().await.clone();
        users.sort_by(|a, b| {
            a.full_name
                .cmp(&b.full_name)
                .then_with(|| a.email.as_str().cmp(b.email.as_str()))
        });
        Ok(users)
    }

    async fn update_last_login(&self, _user_id: Uuid) -> RepositoryResult<()> {
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.users.read().await.len() as u64)
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn save(&self, team: &Team) -> RepositoryResult<()> {
        upsert(&mut *self.teams.write().await, team, Team::id);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let teams = self.teams.read().await;
        Ok(teams.iter().find(|t| t.id() == id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        let mut teams = self.teams.read().await.clone();
        teams.sort_by_key(Team::created_at);
        Ok(teams)
    }

    async fn update_season(&self, id: Uuid, totals: SeasonTotals) -> RepositoryResult<Team> {
        let mut teams = self.teams.write().await;
        let team = teams
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| RepositoryError::not_found("Team", id))?;
        team.record_season(totals);
        Ok(team.clone())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        remove(&mut *self.teams.write().await, "Team", id, Team::id)?;

        // Mirrors ON DELETE SET NULL on players.team_id
        let mut players = self.players.write().await;
        for player in players.iter_mut().filter(|p| p.team_id() == Some(id)) {
            *player = Player::from_persistence(
                player.id(),
                None,
                player.name().to_string(),
                player.age(),
                player.aadhaar().cloned(),
                player.phone().map(str::to_string),
                player.preferred_role().map(str::to_string),
                player.checked_in(),
                player.checked_in_at(),
                player.created_at(),
            );
        }
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.teams.read().await.len() as u64)
    }
}

#[async_trait]
impl PlayerRepository for InMemoryStore {
    async fn save(&self, player: &Player) -> RepositoryResult<()> {
        upsert(&mut *self.players.write().await, player, Player::id);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Player>> {
        let players = self.players.read().await;
        Ok(players.iter().find(|p| p.id() == id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Player>> {
        // Reverse first so later inserts win ties on created_at
        let mut players: Vec<Player> = self.players.read().await.iter().rev().cloned().collect();
        players.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(players)
    }

    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Player>> {
        let players = self.players.read().await;
        Ok(players
            .iter()
            .filter(|p| p.team_id() == Some(team_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        remove(&mut *self.players.write().await, "Player", id, Player::id)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.players.read().await.len() as u64)
    }
}

#[async_trait]
impl MatchRepository for InMemoryStore {
    async fn insert(&self, doc: &MatchDocument) -> RepositoryResult<()> {
        self.matches.write().await.push(doc.clone());
        Ok(())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<MatchDocument>> {
        Ok(self.matches.read().await.clone())
    }
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn save(&self, session: &TrialSession) -> RepositoryResult<()> {
        upsert(&mut *self.sessions.write().await, session, |s| s.id);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<TrialSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.iter().find(|s| s.id == id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<TrialSession>> {
        let mut sessions = self.sessions.read().await.clone();
        // None sorts before Some, so undated sessions lead
        sessions.sort_by_key(|s| (s.date, s.created_at));
        Ok(sessions)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        remove(&mut *self.sessions.write().await, "Session", id, |s| s.id)?;
        self.registrations
            .write()
            .await
            .retain(|r| r.session_id != id);
        Ok(())
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryStore {
    async fn save(&self, registration: &Registration) -> RepositoryResult<()> {
        upsert(&mut *self.registrations.write().await, registration, |r| r.id);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Registration>> {
        let registrations = self.registrations.read().await;
        Ok(registrations.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_session(&self, session_id: Uuid) -> RepositoryResult<Vec<Registration>> {
        let registrations = self.registrations.read().await;
        Ok(registrations
            .iter()
            .filter(|r| r.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn count_by_session(&self, session_id: Uuid) -> RepositoryResult<u64> {
        let registrations = self.registrations.read().await;
        Ok(registrations
            .iter()
            .filter(|r| r.session_id == session_id)
            .count() as u64)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        remove(
            &mut *self.registrations.write().await,
            "Registration",
            id,
            |r| r.id,
        )
    }
}

#[async_trait]
impl TrialRepository for InMemoryStore {
    async fn save(&self, trial: &TrialSignup) -> RepositoryResult<()> {
        self.trials.write().await.push(trial.clone());
        Ok(())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<TrialSignup>> {
        let mut trials: Vec<TrialSignup> = self.trials.read().await.iter().rev().cloned().collect();
        trials.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trials)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.trials.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::{AgeInput, PlayerDetails};
    use crate::domain::sessions::{NewSession, RegistrationForm};
    use chrono::{Duration, Utc};

    fn player(name: &str, team_id: Option<Uuid>) -> Player {
        Player::enroll(
            team_id,
            &PlayerDetails {
                name: name.to_string(),
                age: Some(AgeInput::Number(20.0)),
                ..Default::default()
            },
        )
        .expect("valid player")
    }

    #[tokio::test]
    async fn save_replaces_existing_team() {
        let store = InMemoryStore::new();
        let mut team = Team::named("Strikers").expect("valid team");
        TeamRepository::save(&store, &team).await.unwrap();

        team.record_season(SeasonTotals {
            points: Some(6),
            ..Default::default()
        });
        TeamRepository::save(&store, &team).await.unwrap();

        assert_eq!(TeamRepository::count(&store).await.unwrap(), 1);
        let found = TeamRepository::find_by_id(&store, team.id())
            .await
            .unwrap()
            .expect("team present");
        assert_eq!(found.season().points, Some(6));
    }

    #[tokio::test]
    async fn deleting_team_unlinks_its_players() {
        let store = InMemoryStore::new();
        let team = Team::named("Strikers").expect("valid team");
        TeamRepository::save(&store, &team).await.unwrap();
        let p = player("Asha", Some(team.id()));
        PlayerRepository::save(&store, &p).await.unwrap();

        TeamRepository::delete(&store, team.id()).await.unwrap();

        let found = PlayerRepository::find_by_id(&store, p.id())
            .await
            .unwrap()
            .expect("player kept");
        assert_eq!(found.team_id(), None);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let store = InMemoryStore::new();
        let err = PlayerRepository::delete(&store, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn players_listed_newest_first() {
        let store = InMemoryStore::new();
        let first = player("First", None);
        let second = player("Second", None);
        PlayerRepository::save(&store, &first).await.unwrap();
        PlayerRepository::save(&store, &second).await.unwrap();

        let names: Vec<String> = PlayerRepository::find_all(&store)
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_ignoring_case() {
        let store = InMemoryStore::new();
        let user = |email: &str| User {
            id: Uuid::new_v4(),
            email: Email::new(email).unwrap(),
            password_hash: "hash".to_string(),
            full_name: "Admin".to_string(),
            is_active: true,
        };
        store.create(user("admin@league.in")).await.unwrap();

        let err = store.create(user("ADMIN@league.in")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn sessions_sorted_by_date_and_delete_cascades() {
        let store = InMemoryStore::new();
        let later = TrialSession::schedule(NewSession {
            zone: "North".to_string(),
            ground: "Oval".to_string(),
            date: Some(Utc::now() + Duration::days(3)),
            ..Default::default()
        })
        .unwrap();
        let sooner = TrialSession::schedule(NewSession {
            zone: "South".to_string(),
            ground: "Park".to_string(),
            date: Some(Utc::now() + Duration::days(1)),
            ..Default::default()
        })
        .unwrap();
        SessionRepository::save(&store, &later).await.unwrap();
        SessionRepository::save(&store, &sooner).await.unwrap();

        let all = SessionRepository::find_all(&store).await.unwrap();
        assert_eq!(all[0].id, sooner.id);

        let reg = Registration::sign_up(
            later.id,
            &RegistrationForm {
                name: "Ravi".to_string(),
                age: Some(AgeInput::Number(19.0)),
                ..Default::default()
            },
        )
        .unwrap();
        RegistrationRepository::save(&store, &reg).await.unwrap();
        assert_eq!(store.count_by_session(later.id).await.unwrap(), 1);

        SessionRepository::delete(&store, later.id).await.unwrap();
        assert_eq!(store.count_by_session(later.id).await.unwrap(), 0);
    }
}
