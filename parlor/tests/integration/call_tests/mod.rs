mod test_idle_peer_expires;
