use crate::error_handler::CustomError;
use crate::schema::{district, state};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Identifiable, Queryable, AsChangeset)]
#[diesel(table_name = district, primary_key(district_id))]
pub struct District {
    pub district_id: i32,
    pub district_name: String,
    pub state_id: i32,
    pub cases: i32,
    pub cured: i32,
    pub active: i32,
    pub deaths: i32,
}

#[derive(Debug, Serialize, Deserialize, AsChangeset, Insertable)]
#[diesel(table_name = district)]
pub struct InsertableDistrict {
    pub district_name: String,
    pub state_id: i32,
    pub cases: i32,
    pub cured: i32,
    pub active: i32,
    pub deaths: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistrictDetails {
    #[serde(rename = "stateName")]
    pub state_name: String,
}

impl District {
    pub fn find(conn: &mut SqliteConnection, id: i32) -> Result<Option<Self>, CustomError> {
        let district = district::table
            .filter(district::district_id.eq(id))
            .first(conn)
            .optional()?;
        Ok(district)
    }

    pub fn create(
        conn: &mut SqliteConnection,
        district: InsertableDistrict,
    ) -> Result<usize, CustomError> {
        let inserted = diesel::insert_into(district::table)
            .values(district)
            .execute(conn)?;
        Ok(inserted)
    }

    /// Full replace of all six fields; an unknown id updates zero rows.
    pub fn update(
        conn: &mut SqliteConnection,
        id: i32,
        district: InsertableDistrict,
    ) -> Result<usize, CustomError> {
        let updated = diesel::update(district::table.filter(district::district_id.eq(id)))
            .set(district)
            .execute(conn)?;
        Ok(updated)
    }

    pub fn delete(conn: &mut SqliteConnection, id: i32) -> Result<usize, CustomError> {
        let deleted =
            diesel::delete(district::table.filter(district::district_id.eq(id))).execute(conn)?;
        Ok(deleted)
    }

    pub fn state_name(conn: &mut SqliteConnection, id: i32) -> Result<Option<String>, CustomError> {
        let name = district::table
            .inner_join(state::table)
            .filter(district::district_id.eq(id))
            .select(state::state_name)
            .first(conn)
            .optional()?;
        Ok(name)
    }
}
