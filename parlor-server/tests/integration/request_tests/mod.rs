mod test_health;
mod test_missing_fields;
