
mod test_new_game;
