// ABOUTME: Table definitions for users, fractals, participants, voting_rounds, and votes
// ABOUTME: Each step builds an idempotent CREATE TABLE IF NOT EXISTS in dependency order

use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;
use std::fmt;

/// The five structures owned by the migrator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SchemaTable {
    Users,
    Fractals,
    Participants,
    VotingRounds,
    Votes,
}

impl SchemaTable {
    pub fn name(&self) -> &'static str {
        match self {
            SchemaTable::Users => "users",
            SchemaTable::Fractals => "fractals",
            SchemaTable::Participants => "participants",
            SchemaTable::VotingRounds => "voting_rounds",
            SchemaTable::Votes => "votes",
        }
    }
}

impl fmt::Display for SchemaTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of the schema sequence: a table, the tables it references, and its statement.
#[derive(Copy, Clone, Debug)]
pub struct TableStep {
    pub table: SchemaTable,
    pub depends_on: &'static [SchemaTable],
    build: fn() -> TableCreateStatement,
}

impl TableStep {
    /// All steps, parents before dependents.
    pub fn all() -> [TableStep; 5] {
        [
            TableStep {
                table: SchemaTable::Users,
                depends_on: &[],
                build: create_users,
            },
            TableStep {
                table: SchemaTable::Fractals,
                depends_on: &[SchemaTable::Users],
                build: create_fractals,
            },
            TableStep {
                table: SchemaTable::Participants,
                depends_on: &[SchemaTable::Fractals, SchemaTable::Users],
                build: create_participants,
            },
            TableStep {
                table: SchemaTable::VotingRounds,
                depends_on: &[SchemaTable::Fractals, SchemaTable::Users],
                build: create_voting_rounds,
            },
            TableStep {
                table: SchemaTable::Votes,
                depends_on: &[SchemaTable::VotingRounds, SchemaTable::Users],
                build: create_votes,
            },
        ]
    }

    pub fn statement(&self) -> TableCreateStatement {
        (self.build)()
    }
}

/// Renders every step as SQL for `backend` without touching a database.
pub fn render_schema(backend: DbBackend) -> Vec<String> {
    TableStep::all()
        .iter()
        .map(|step| backend.build(&step.statement()).sql)
        .collect()
}

fn create_users() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(ColumnDef::new(Users::Id).integer().not_null().auto_increment().primary_key())
        .col(ColumnDef::new(Users::DiscordId).string_len(255).not_null().unique_key())
        .col(ColumnDef::new(Users::Username).string_len(255).not_null())
        .col(ColumnDef::new(Users::DisplayName).string_len(255))
        .col(ColumnDef::new(Users::AvatarUrl).text())
        .col(ColumnDef::new(Users::WalletAddress).string_len(255))
        .col(
            ColumnDef::new(Users::TotalFractals)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(Users::TotalFractals).gte(0)),
        )
        .col(
            ColumnDef::new(Users::TotalWins)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(Users::TotalWins).gte(0)),
        )
        .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null().default(Expr::current_timestamp()))
        .col(ColumnDef::new(Users::UpdatedAt).timestamp().not_null().default(Expr::current_timestamp()))
        .to_owned()
}

fn create_fractals() -> TableCreateStatement {
    Table::create()
        .table(Fractals::Table)
        .if_not_exists()
        .col(ColumnDef::new(Fractals::Id).integer().not_null().auto_increment().primary_key())
        .col(ColumnDef::new(Fractals::ThreadId).string_len(255).not_null().unique_key())
        .col(ColumnDef::new(Fractals::Name).string_len(255).not_null())
        .col(ColumnDef::new(Fractals::GuildId).string_len(255).not_null())
        .col(ColumnDef::new(Fractals::FacilitatorId).integer())
        .col(ColumnDef::new(Fractals::Status).string_len(50).not_null().default("active"))
        .col(ColumnDef::new(Fractals::CreatedAt).timestamp().not_null().default(Expr::current_timestamp()))
        .col(ColumnDef::new(Fractals::CompletedAt).timestamp())
        .foreign_key(
            ForeignKey::create()
                .name("fk_fractals_facilitator_id")
                .from(Fractals::Table, Fractals::FacilitatorId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_participants() -> TableCreateStatement {
    Table::create()
        .table(Participants::Table)
        .if_not_exists()
        .col(ColumnDef::new(Participants::Id).integer().not_null().auto_increment().primary_key())
        .col(ColumnDef::new(Participants::FractalId).integer())
        .col(ColumnDef::new(Participants::UserId).integer())
        .col(
            ColumnDef::new(Participants::Level)
                .integer()
                .not_null()
                .check(Expr::col(Participants::Level).gte(0)),
        )
        .col(ColumnDef::new(Participants::CreatedAt).timestamp().not_null().default(Expr::current_timestamp()))
        .foreign_key(
            ForeignKey::create()
                .name("fk_participants_fractal_id")
                .from(Participants::Table, Participants::FractalId)
                .to(Fractals::Table, Fractals::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_participants_user_id")
                .from(Participants::Table, Participants::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .index(
            Index::create()
                .name("uq_participants_fractal_user_level")
                .table(Participants::Table)
                .col(Participants::FractalId)
                .col(Participants::UserId)
                .col(Participants::Level)
                .unique(),
        )
        .to_owned()
}

fn create_voting_rounds() -> TableCreateStatement {
    Table::create()
        .table(VotingRounds::Table)
        .if_not_exists()
        .col(ColumnDef::new(VotingRounds::Id).integer().not_null().auto_increment().primary_key())
        .col(ColumnDef::new(VotingRounds::FractalId).integer())
        .col(
            ColumnDef::new(VotingRounds::Level)
                .integer()
                .not_null()
                .check(Expr::col(VotingRounds::Level).gte(0)),
        )
        .col(ColumnDef::new(VotingRounds::WinnerId).integer())
        .col(
            ColumnDef::new(VotingRounds::TotalVotes)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(VotingRounds::TotalVotes).gte(0)),
        )
        .col(ColumnDef::new(VotingRounds::CreatedAt).timestamp().not_null().default(Expr::current_timestamp()))
        .col(ColumnDef::new(VotingRounds::CompletedAt).timestamp())
        .foreign_key(
            ForeignKey::create()
                .name("fk_voting_rounds_fractal_id")
                .from(VotingRounds::Table, VotingRounds::FractalId)
                .to(Fractals::Table, Fractals::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        // Round history survives the winner's deletion.
        .foreign_key(
            ForeignKey::create()
                .name("fk_voting_rounds_winner_id")
                .from(VotingRounds::Table, VotingRounds::WinnerId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .index(
            Index::create()
                .name("uq_voting_rounds_fractal_level")
                .table(VotingRounds::Table)
                .col(VotingRounds::FractalId)
                .col(VotingRounds::Level)
                .unique(),
        )
        .to_owned()
}

fn create_votes() -> TableCreateStatement {
    Table::create()
        .table(Votes::Table)
        .if_not_exists()
        .col(ColumnDef::new(Votes::Id).integer().not_null().auto_increment().primary_key())
        .col(ColumnDef::new(Votes::VotingRoundId).integer())
        .col(ColumnDef::new(Votes::VoterId).integer())
        .col(ColumnDef::new(Votes::CandidateId).integer())
        .col(ColumnDef::new(Votes::CreatedAt).timestamp().not_null().default(Expr::current_timestamp()))
        .foreign_key(
            ForeignKey::create()
                .name("fk_votes_voting_round_id")
                .from(Votes::Table, Votes::VotingRoundId)
                .to(VotingRounds::Table, VotingRounds::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_votes_voter_id")
                .from(Votes::Table, Votes::VoterId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_votes_candidate_id")
                .from(Votes::Table, Votes::CandidateId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .index(
            Index::create()
                .name("uq_votes_round_voter")
                .table(Votes::Table)
                .col(Votes::VotingRoundId)
                .col(Votes::VoterId)
                .unique(),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    DiscordId,
    Username,
    DisplayName,
    AvatarUrl,
    WalletAddress,
    TotalFractals,
    TotalWins,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Fractals {
    Table,
    Id,
    ThreadId,
    Name,
    GuildId,
    FacilitatorId,
    Status,
    CreatedAt,
    CompletedAt,
}

#[derive(DeriveIden)]
enum Participants {
    Table,
    Id,
    FractalId,
    UserId,
    Level,
    CreatedAt,
}

#[derive(DeriveIden)]
enum VotingRounds {
    Table,
    Id,
    FractalId,
    Level,
    WinnerId,
    TotalVotes,
    CreatedAt,
    CompletedAt,
}

#[derive(DeriveIden)]
enum Votes {
    Table,
    Id,
    VotingRoundId,
    VoterId,
    CandidateId,
    CreatedAt,
}
