mod tests {
    use std::thread;
    use std::time::{Duration as StdDuration, Instant};

    use myrtio_lamp::channel::TryReceiveError;
    use myrtio_lamp::{
        CommandChannel, Duration, GestureChannel, GestureEvent, LampConfig, LampError,
        LampMode, LedCommand, MainController,
    };

    fn config(ramp_period_ms: u64) -> LampConfig {
        LampConfig {
            ramp_period: Duration::from_millis(ramp_period_ms),
            poll_interval: Duration::from_millis(1),
            ..LampConfig::default()
        }
    }

    fn drain(channel: &CommandChannel) -> Vec<LedCommand> {
        let mut commands = Vec::new();
        while let Ok(raw) = channel.try_receive() {
            commands.push(LedCommand::from_raw(raw).unwrap());
        }
        commands
    }

    #[test_log::test]
    fn test_clicks_cycle_mode_and_forward_it() {
        static COMMANDS: CommandChannel = CommandChannel::new();
        let mut controller = MainController::new(COMMANDS.sender(), &config(50));
        assert_eq!(controller.mode(), LampMode::Temperature);

        controller.on_gesture(GestureEvent::RightClick).unwrap();
        assert_eq!(controller.mode(), LampMode::Color);
        assert_eq!(drain(&COMMANDS), vec![LedCommand::SetMode(LampMode::Color)]);

        controller.on_gesture(GestureEvent::LeftClick).unwrap();
        controller.on_gesture(GestureEvent::LeftClick).unwrap();
        assert_eq!(controller.mode(), LampMode::Effects);
        assert_eq!(
            drain(&COMMANDS),
            vec![
                LedCommand::SetMode(LampMode::Temperature),
                LedCommand::SetMode(LampMode::Effects)
            ]
        );
    }

    #[test]
    fn test_mode_changes_stay_local_when_forwarding_is_off() {
        static COMMANDS: CommandChannel = CommandChannel::new();
        let config = LampConfig {
            forward_mode_changes: false,
            ..config(50)
        };
        let mut controller = MainController::new(COMMANDS.sender(), &config);

        controller.on_gesture(GestureEvent::RightClick).unwrap();
        assert_eq!(controller.mode(), LampMode::Color);
        assert!(COMMANDS.is_empty());
    }

    #[test]
    fn test_swipes_do_nothing() {
        static COMMANDS: CommandChannel = CommandChannel::new();
        let mut controller = MainController::new(COMMANDS.sender(), &config(5));

        controller.on_gesture(GestureEvent::LeftSwipe).unwrap();
        controller.on_gesture(GestureEvent::RightSwipe).unwrap();
        thread::sleep(StdDuration::from_millis(20));

        assert_eq!(controller.mode(), LampMode::Temperature);
        assert!(!controller.is_ramping());
        assert!(COMMANDS.is_empty());
    }

    #[test]
    fn test_hold_end_without_ramp_is_noop() {
        static COMMANDS: CommandChannel = CommandChannel::new();
        let mut controller = MainController::new(COMMANDS.sender(), &config(5));

        controller.on_gesture(GestureEvent::LeftHoldEnd).unwrap();
        controller.on_gesture(GestureEvent::RightHoldEnd).unwrap();
        assert!(!controller.is_ramping());
        assert!(COMMANDS.is_empty());
    }

    #[test]
    fn test_unrecognized_gesture_is_rejected() {
        static COMMANDS: CommandChannel = CommandChannel::new();
        let mut controller = MainController::new(COMMANDS.sender(), &config(5));

        assert_eq!(
            controller.on_raw_gesture(200),
            Err(LampError::UnrecognizedGesture(200))
        );
        assert_eq!(controller.mode(), LampMode::Temperature);
        assert!(COMMANDS.is_empty());
    }

    #[test]
    fn test_hold_gestures_pick_ramp_command() {
        static COMMANDS: CommandChannel = CommandChannel::new();
        let mut controller = MainController::new(COMMANDS.sender(), &config(1000));

        let cases = [
            (GestureEvent::LeftHoldStart, LedCommand::BrightnessDown),
            (GestureEvent::RightHoldStart, LedCommand::BrightnessUp),
            (GestureEvent::LeftClickHold, LedCommand::IntensityDown),
            (GestureEvent::RightClickHold, LedCommand::IntensityUp),
        ];
        for (gesture, command) in cases {
            controller.on_gesture(gesture).unwrap();
            assert_eq!(controller.ramp_command(), Some(command));
            controller.on_gesture(GestureEvent::LeftHoldEnd).unwrap();
            assert_eq!(controller.ramp_command(), None);
            assert!(drain(&COMMANDS).iter().all(|sent| *sent == command));
        }
    }

    #[test_log::test]
    fn test_ramp_repeats_until_hold_end() {
        static COMMANDS: CommandChannel = CommandChannel::new();
        let mut controller = MainController::new(COMMANDS.sender(), &config(10));

        controller.on_gesture(GestureEvent::RightClick).unwrap();
        assert_eq!(controller.mode(), LampMode::Color);
        drain(&COMMANDS);

        controller.on_gesture(GestureEvent::RightHoldStart).unwrap();
        assert!(controller.is_ramping());
        thread::sleep(StdDuration::from_millis(60));
        controller.on_gesture(GestureEvent::RightHoldEnd).unwrap();
        assert!(!controller.is_ramping());

        let sent = drain(&COMMANDS);
        assert!(sent.len() >= 2, "only {} commands sent", sent.len());
        assert!(sent.iter().all(|command| *command == LedCommand::BrightnessUp));

        // Nothing more within several periods
        thread::sleep(StdDuration::from_millis(50));
        assert!(COMMANDS.is_empty());
    }

    #[test]
    fn test_immediate_stop_sends_at_most_one_command() {
        static COMMANDS: CommandChannel = CommandChannel::new();
        let mut controller = MainController::new(COMMANDS.sender(), &config(1000));

        let started = Instant::now();
        controller.on_gesture(GestureEvent::RightHoldStart).unwrap();
        controller.on_gesture(GestureEvent::RightHoldEnd).unwrap();
        // Stopping wakes the ramp instead of waiting out its period
        assert!(started.elapsed() < StdDuration::from_millis(900));

        assert!(drain(&COMMANDS).len() <= 1);
        thread::sleep(StdDuration::from_millis(20));
        assert!(COMMANDS.is_empty());
    }

    #[test]
    fn test_second_ramp_start_stops_the_first() {
        static COMMANDS: CommandChannel = CommandChannel::new();
        let mut controller = MainController::new(COMMANDS.sender(), &config(10));

        controller.on_gesture(GestureEvent::LeftHoldStart).unwrap();
        thread::sleep(StdDuration::from_millis(30));
        controller.on_gesture(GestureEvent::RightClickHold).unwrap();
        assert_eq!(controller.ramp_command(), Some(LedCommand::IntensityUp));
        thread::sleep(StdDuration::from_millis(30));
        controller.on_gesture(GestureEvent::RightHoldEnd).unwrap();

        let sent = drain(&COMMANDS);
        let switch = sent
            .iter()
            .position(|command| *command == LedCommand::IntensityUp)
            .expect("second ramp sent nothing");
        assert!(switch > 0);
        assert!(sent[..switch].iter().all(|c| *c == LedCommand::BrightnessDown));
        assert!(sent[switch..].iter().all(|c| *c == LedCommand::IntensityUp));

        // The first ramp did not survive the switch
        thread::sleep(StdDuration::from_millis(50));
        assert!(COMMANDS.is_empty());
    }

    #[test_log::test]
    fn test_run_stops_when_gestures_close() {
        static GESTURES: GestureChannel = GestureChannel::new();
        static COMMANDS: CommandChannel = CommandChannel::new();
        let controller = MainController::new(COMMANDS.sender(), &config(5));

        let sender = GESTURES.sender();
        sender.try_send(GestureEvent::RightClick.as_raw()).unwrap();
        sender.try_send(77).unwrap();
        sender.try_send(GestureEvent::LeftSwipe.as_raw()).unwrap();
        sender.try_send(GestureEvent::RightClick.as_raw()).unwrap();
        sender.close();

        controller.run(GESTURES.receiver());

        assert!(COMMANDS.is_closed());
        assert_eq!(
            drain(&COMMANDS),
            vec![
                LedCommand::SetMode(LampMode::Color),
                LedCommand::SetMode(LampMode::DynamicColor)
            ]
        );
        assert_eq!(COMMANDS.try_receive(), Err(TryReceiveError::Closed));
    }

    #[test]
    fn test_run_stops_running_ramp_on_close() {
        static GESTURES: GestureChannel = GestureChannel::new();
        static COMMANDS: CommandChannel = CommandChannel::new();
        let controller = MainController::new(COMMANDS.sender(), &config(5));

        let handle = thread::spawn(move || controller.run(GESTURES.receiver()));
        GESTURES
            .try_send(GestureEvent::LeftClickHold.as_raw())
            .unwrap();
        thread::sleep(StdDuration::from_millis(30));
        GESTURES.close();
        handle.join().unwrap();

        let sent = drain(&COMMANDS);
        assert!(!sent.is_empty());
        assert!(sent.iter().all(|command| *command == LedCommand::IntensityDown));
        thread::sleep(StdDuration::from_millis(20));
        assert_eq!(COMMANDS.try_receive(), Err(TryReceiveError::Closed));
    }
}
