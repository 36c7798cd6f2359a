use super::*;

fn settle(p: &mut Palette) -> usize {
    let mut frames = 0;
    while !p.is_settled() {
        p.update();
        frames += 1;
        assert!(frames < 1_000, "fade never settled");
    }
    frames
}

#[test]
fn first_bank_appears_on_the_first_update() {
    let mut p = Palette::default();
    assert_eq!(p.color(Slot::Background), Rgba8::BLACK);
    p.update();
    assert_eq!(p.color(Slot::Background), Rgba8::gray(181));
    assert_eq!(p.color(Slot::Accent), Rgba8::rgb(163, 141, 116));
}

#[test]
fn next_is_ignored_mid_fade() {
    let mut p = Palette::default();
    assert!(!p.next());
    settle(&mut p);
    assert!(p.next());
    assert_eq!(p.index(), 1);
    p.update();
    assert!(!p.next());
    assert_eq!(p.index(), 1);
}

#[test]
fn fade_lands_on_the_destination_bank() {
    let mut p = Palette::default();
    settle(&mut p);
    p.next();
    p.update();
    let mid = p.color(Slot::Background);
    assert_ne!(mid, Rgba8::gray(181));
    assert_ne!(mid, Rgba8::rgb(57, 109, 193));
    settle(&mut p);
    for (i, slot) in [
        Slot::Background,
        Slot::Middle,
        Slot::Foreground,
        Slot::Accent,
        Slot::Highlight,
        Slot::White,
        Slot::Black,
    ]
    .into_iter()
    .enumerate()
    {
        assert_eq!(p.color(slot), BANKS[1][i]);
    }
}

#[test]
fn banks_wrap_around() {
    let mut p = Palette::new(6);
    settle(&mut p);
    p.next();
    assert_eq!(p.index(), 0);
    assert_eq!(Palette::new(9).index(), 2);
}
