use crate::error_handler::CustomError;
use crate::schema::state;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Nullable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Identifiable, Queryable)]
#[diesel(table_name = state, primary_key(state_id))]
pub struct State {
    pub state_id: i32,
    pub state_name: String,
    pub population: i32,
}

/// District counters summed per state. SQLite aggregates over zero rows
/// produce a single all-NULL row, hence the `Option` totals.
#[derive(Debug, Serialize, Deserialize, QueryableByName)]
pub struct StateStats {
    #[diesel(sql_type = Nullable<BigInt>)]
    pub total_cases: Option<i64>,
    #[diesel(sql_type = Nullable<BigInt>)]
    pub total_cured: Option<i64>,
    #[diesel(sql_type = Nullable<BigInt>)]
    pub total_active: Option<i64>,
    #[diesel(sql_type = Nullable<BigInt>)]
    pub total_deaths: Option<i64>,
}

impl State {
    pub fn find_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, CustomError> {
        let states = state::table.load(conn)?;
        Ok(states)
    }

    pub fn find(conn: &mut SqliteConnection, id: i32) -> Result<Option<Self>, CustomError> {
        let state = state::table
            .filter(state::state_id.eq(id))
            .first(conn)
            .optional()?;
        Ok(state)
    }
}

impl StateStats {
    pub fn for_state(conn: &mut SqliteConnection, id: i32) -> Result<Self, CustomError> {
        log::trace!("Summing district counters for state {}", id);
        let stats = diesel::sql_query(
            "SELECT SUM(cases) AS total_cases, SUM(cured) AS total_cured, \
             SUM(active) AS total_active, SUM(deaths) AS total_deaths \
             FROM district WHERE state_id = ?",
        )
        .bind::<Integer, _>(id)
        .get_result(conn)?;
        Ok(stats)
    }
}
