// CSV documents produced by the portal
//
// Every writer emits its header explicitly so empty exports still carry it.

use std::io;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::import::ImportResult;
use crate::domain::player::Player;
use crate::domain::repositories::User;
use crate::domain::sessions::Registration;
use crate::domain::standings::Standings;

pub const LEADERBOARD_HEADER: [&str; 9] = [
    "rank", "teamId", "team", "played", "won", "drawn", "lost", "points", "nrr",
];

pub const REGISTRATIONS_HEADER: [&str; 8] = [
    "index", "id", "name", "age", "phone", "aadhaar", "approved", "createdAt",
];

pub const IMPORT_ERRORS_HEADER: [&str; 8] = [
    "rowIndex", "error", "name", "age", "aadhaar", "phone", "preferredRole", "teamName",
];

pub const IMPORT_TEMPLATE_HEADER: [&str; 6] =
    ["name", "age", "aadhaar", "phone", "preferredRole", "teamName"];

const IMPORT_TEMPLATE_SAMPLE: [&str; 6] = [
    "Rahul Sharma",
    "23",
    "123456789012",
    "9876543210",
    "Batsman",
    "East Zone",
];

pub const PLAYERS_HEADER: [&str; 11] = [
    "id", "name", "age", "aadhaar", "phone", "preferredRole", "teamId", "teamName", "checkedIn",
    "checkedInAt", "createdAt",
];

pub const USERS_HEADER: [&str; 4] = ["id", "email", "fullName", "isActive"];

#[derive(Serialize)]
struct LeaderboardLine<'a> {
    rank: usize,
    team_id: Uuid,
    team: &'a str,
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    points: u32,
    nrr: Option<String>,
}

#[derive(Serialize)]
struct RegistrationLine<'a> {
    index: usize,
    id: Uuid,
    name: &'a str,
    age: u32,
    phone: &'a str,
    aadhaar: &'a str,
    approved: bool,
    created_at: String,
}

#[derive(Serialize)]
struct ImportErrorLine<'a> {
    row_index: usize,
    error: &'a str,
    name: &'a str,
    age: &'a str,
    aadhaar: &'a str,
    phone: &'a str,
    preferred_role: &'a str,
    team_name: &'a str,
}

#[derive(Serialize)]
struct PlayerLine<'a> {
    id: Uuid,
    name: &'a str,
    age: u32,
    aadhaar: &'a str,
    phone: &'a str,
    preferred_role: &'a str,
    team_id: Option<Uuid>,
    team_name: &'a str,
    checked_in: bool,
    checked_in_at: Option<String>,
    created_at: String,
}

#[derive(Serialize)]
struct UserLine<'a> {
    id: Uuid,
    email: &'a str,
    full_name: &'a str,
    is_active: bool,
}

fn writer(header: &[&str]) -> csv::Result<csv::Writer<Vec<u8>>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(header)?;
    Ok(wtr)
}

fn finish(mut wtr: csv::Writer<Vec<u8>>) -> csv::Result<String> {
    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| io::Error::new(e.error().kind(), e.error().to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// League table, ranked from 1
pub fn leaderboard_csv(standings: &Standings) -> csv::Result<String> {
    let mut wtr = writer(&LEADERBOARD_HEADER)?;
    for (i, row) in standings.rows.iter().enumerate() {
        wtr.serialize(LeaderboardLine {
            rank: i + 1,
            team_id: row.team_id,
            team: &row.name,
            played: row.played,
            won: row.won,
            drawn: row.drawn,
            lost: row.lost,
            points: row.points,
            nrr: row.nrr.map(|n| n.to_string()),
        })?;
    }
    finish(wtr)
}

/// Participants of one session, numbered from 1
pub fn registrations_csv(registrations: &[Registration]) -> csv::Result<String> {
    let mut wtr = writer(&REGISTRATIONS_HEADER)?;
    for (i, r) in registrations.iter().enumerate() {
        wtr.serialize(RegistrationLine {
            index: i + 1,
            id: r.id,
            name: &r.name,
            age: r.age.years(),
            phone: r.phone.as_deref().unwrap_or(""),
            aadhaar: r.aadhaar.as_ref().map(|a| a.as_str()).unwrap_or(""),
            approved: r.approved,
            created_at: r.created_at.to_rfc3339(),
        })?;
    }
    finish(wtr)
}

/// Failing import rows only
pub fn import_errors_csv(results: &[ImportResult]) -> csv::Result<String> {
    let mut wtr = writer(&IMPORT_ERRORS_HEADER)?;
    for r in results.iter().filter(|r| !r.ok) {
        wtr.serialize(ImportErrorLine {
            row_index: r.row_index,
            error: r.error.as_deref().unwrap_or(""),
            name: &r.raw.name,
            age: &r.raw.age,
            aadhaar: &r.raw.aadhaar,
            phone: &r.raw.phone,
            preferred_role: &r.raw.preferred_role,
            team_name: &r.raw.team_name,
        })?;
    }
    finish(wtr)
}

/// Header plus one sample row for bulk player import
pub fn import_template_csv() -> csv::Result<String> {
    let mut wtr = writer(&IMPORT_TEMPLATE_HEADER)?;
    wtr.write_record(IMPORT_TEMPLATE_SAMPLE)?;
    finish(wtr)
}

/// Players with their team name resolved; passwords and tokens never appear here
pub fn players_csv<'a>(
    players: impl IntoIterator<Item = (&'a Player, Option<&'a str>)>,
) -> csv::Result<String> {
    let mut wtr = writer(&PLAYERS_HEADER)?;
    for (p, team_name) in players {
        wtr.serialize(PlayerLine {
            id: p.id(),
            name: p.name(),
            age: p.age().years(),
            aadhaar: p.aadhaar().map(|a| a.as_str()).unwrap_or(""),
            phone: p.phone().unwrap_or(""),
            preferred_role: p.preferred_role().unwrap_or(""),
            team_id: p.team_id(),
            team_name: team_name.unwrap_or(""),
            checked_in: p.checked_in(),
            checked_in_at: p.checked_in_at().map(|t| t.to_rfc3339()),
            created_at: p.created_at().to_rfc3339(),
        })?;
    }
    finish(wtr)
}

/// Portal accounts without password hashes
pub fn users_csv(users: &[User]) -> csv::Result<String> {
    let mut wtr = writer(&USERS_HEADER)?;
    for u in users {
        wtr.serialize(UserLine {
            id: u.id,
            email: u.email.as_str(),
            full_name: &u.full_name,
            is_active: u.is_active,
        })?;
    }
    finish(wtr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::import::ImportRow;
    use crate::domain::standings::{StandingsMode, StandingsRow};
    use crate::domain::user::Email;
    use rust_decimal::Decimal;

    #[test]
    fn template_has_header_and_sample() {
        let csv = import_template_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "name,age,aadhaar,phone,preferredRole,teamName");
        assert_eq!(
            lines[1],
            "Rahul Sharma,23,123456789012,9876543210,Batsman,East Zone"
        );
    }

    #[test]
    fn leaderboard_ranks_and_blank_nrr() {
        let mut first = StandingsRow::zeroed(Uuid::nil(), "Kings, XI");
        first.points = 6;
        first.nrr = Some(Decimal::new(52, 2));
        let second = StandingsRow::zeroed(Uuid::nil(), "Riders");
        let standings = Standings {
            mode: StandingsMode::Direct,
            rows: vec![first, second],
        };

        let csv = leaderboard_csv(&standings).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "rank,teamId,team,played,won,drawn,lost,points,nrr");
        assert_eq!(
            lines[1],
            format!("1,{},\"Kings, XI\",0,0,0,0,6,0.52", Uuid::nil())
        );
        assert_eq!(lines[2], format!("2,{},Riders,0,0,0,0,0,", Uuid::nil()));
    }

    #[test]
    fn empty_export_still_has_header() {
        let csv = registrations_csv(&[]).unwrap();
        assert_eq!(csv, "index,id,name,age,phone,aadhaar,approved,createdAt\n");
    }

    #[test]
    fn import_errors_skip_successful_rows() {
        let bad = ImportRow {
            name: "Say \"Hi\"".to_string(),
            age: "9".to_string(),
            ..Default::default()
        };
        let results = vec![
            ImportResult::created(2, ImportRow::default(), Uuid::nil()),
            ImportResult::failed(3, bad, "Invalid or missing age (must be numeric >= 12)"),
        ];

        let csv = import_errors_csv(&results).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "3,Invalid or missing age (must be numeric >= 12),\"Say \"\"Hi\"\"\",9,,,,"
        );
    }

    #[test]
    fn users_export_omits_password_hash() {
        let users = vec![User {
            id: Uuid::nil(),
            email: Email::new("admin@league.in").unwrap(),
            password_hash: "$2b$12$secret".to_string(),
            full_name: "Admin".to_string(),
            is_active: true,
        }];

        let csv = users_csv(&users).unwrap();
        assert!(!csv.contains("secret"));
        assert!(csv.starts_with("id,email,fullName,isActive\n"));
    }
}
