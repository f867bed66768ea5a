mod test_invalid_config;
