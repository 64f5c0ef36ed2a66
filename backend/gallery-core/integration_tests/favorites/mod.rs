mod persistence;
