mod test_poll_outage_recovers;
