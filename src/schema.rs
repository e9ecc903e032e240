diesel::table! {
    district (district_id) {
        district_id -> Integer,
        district_name -> Text,
        state_id -> Integer,
        cases -> Integer,
        cured -> Integer,
        active -> Integer,
        deaths -> Integer,
    }
}

diesel::table! {
    state (state_id) {
        state_id -> Integer,
        state_name -> Text,
        population -> Integer,
    }
}

diesel::joinable!(district -> state (state_id));

diesel::allow_tables_to_appear_in_same_query!(
    district,
    state,
);
