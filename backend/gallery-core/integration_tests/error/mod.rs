mod formatting;
