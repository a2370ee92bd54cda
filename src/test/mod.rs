mod holdings_store;
