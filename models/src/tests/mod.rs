mod photo;
mod search_response;
