mod paths;
mod search_flow;
