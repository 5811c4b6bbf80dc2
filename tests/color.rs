mod tests {
    use ark_lights::color::{NOTE_COLORS, NOTE_COUNT, Rgb, rgb_from_u32, with_red_only};
    use ark_lights::Note;

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF0000), Rgb::new(255, 0, 0));
        assert_eq!(rgb_from_u32(0xCE9AFF), Rgb::new(0xCE, 0x9A, 0xFF));
        assert_eq!(rgb_from_u32(0xFF_0000FE), Rgb::new(0, 0, 0xFE));
    }

    #[test]
    fn test_with_red_only() {
        assert_eq!(with_red_only(Rgb::new(10, 20, 30)), Rgb::new(10, 0, 0));
    }

    #[test]
    fn test_note_colors() {
        assert_eq!(Note::C.color(), Rgb::new(255, 0, 0));
        assert_eq!(Note::from_raw(9).unwrap().color(), Rgb::new(0x33, 0xCC, 0x33));
        assert_eq!(Note::B.color(), Rgb::new(0, 0, 0xFE));

        for raw in 0..NOTE_COUNT as u8 {
            let note = Note::from_raw(raw).unwrap();
            assert_eq!(note.color(), NOTE_COLORS[usize::from(raw)]);
            for other in 0..raw {
                assert_ne!(note.color(), Note::from_raw(other).unwrap().color());
            }
        }
    }

    #[test]
    fn test_note_from_raw() {
        assert_eq!(Note::from_raw(0), Some(Note::C));
        assert_eq!(Note::from_raw(11), Some(Note::B));
        assert_eq!(Note::from_raw(12), None);
        assert_eq!(Note::from_raw(255), None);
    }

    #[test]
    fn test_note_from_midi() {
        assert_eq!(Note::from_midi(60), Note::C);
        assert_eq!(Note::from_midi(61).raw(), 1);
        assert_eq!(Note::from_midi(24), Note::C);
        assert_eq!(Note::from_midi(127).raw(), 7);
    }

    #[test]
    fn test_note_names() {
        assert_eq!(Note::C.as_str(), "C");
        assert_eq!(Note::from_raw(6).unwrap().as_str(), "Gb");
        assert_eq!(Note::parse_from_str("Gb"), Note::from_raw(6));
        assert_eq!(Note::parse_from_str("B"), Some(Note::B));
        assert_eq!(Note::parse_from_str("H"), None);
    }
}
