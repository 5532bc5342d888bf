table! {
    comments (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        created_by -> Nullable<BigInt>,
        text -> Text,
    }
}

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

joinable!(comments -> users (created_by));

allow_tables_to_appear_in_same_query!(comments, users);
