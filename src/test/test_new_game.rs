mod test {
    use crate::core::{GameConfig, new_game};

    #[test]
    fn when_chance_is_zero_grid_starts_all_off() {
        let config = GameConfig::new(4, 4, 0.0).unwrap();
        let state = new_game(&config);

        assert!(state.grid.iter().all(|row| row.iter().all(|&lit| !lit)));
        assert!(!state.is_won());
    }

    #[test]
    fn when_chance_is_one_grid_starts_all_on_and_won() {
        let config = GameConfig::new(4, 4, 1.0).unwrap();
        let state = new_game(&config);

        assert!(state.grid.iter().all(|row| row.iter().all(|&lit| lit)));
        assert!(state.is_won());
    }

    #[test]
    fn when_game_created_grid_has_configured_dimensions() {
        let config = GameConfig::new(5, 7, 0.5).unwrap();
        let state = new_game(&config);

        assert_eq!(state.grid.len(), 5);
        assert!(state.grid.iter().all(|row| row.len() == 7));
        assert_eq!(state.height(), 5);
        assert_eq!(state.width(), 7);
    }

    #[test]
    fn when_dimensions_are_zero_config_is_rejected() {
        assert!(GameConfig::new(0, 3, 0.5).is_err());
        assert!(GameConfig::new(3, 0, 0.5).is_err());
    }

    #[test]
    fn when_chance_is_out_of_range_config_is_rejected() {
        assert!(GameConfig::new(3, 3, -0.1).is_err());
        assert!(GameConfig::new(3, 3, 1.5).is_err());
        assert!(GameConfig::new(3, 3, f64::NAN).is_err());
    }

    #[test]
    fn default_config_is_three_by_three_with_half_chance() {
        let config = GameConfig::default();
        assert_eq!(config.nrows, 3);
        assert_eq!(config.ncols, 3);
        assert_eq!(config.chance_light_starts_on, 0.50);
    }
}
