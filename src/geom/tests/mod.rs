mod test_tessellation_basic;
