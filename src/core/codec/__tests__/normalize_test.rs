use crate::core::codec::normalize_to_u8;
use crate::core::types::{ChannelGrid, BLOCK_SIZE};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn 전역_min_max가_0과_255로_매핑() {
    let mut rng = StdRng::seed_from_u64(42);
    let red = ChannelGrid::from_fn(|_| rng.gen_range(-500.0..500.0));
    let green = ChannelGrid::from_fn(|_| rng.gen_range(-500.0..500.0));
    let mut blue = ChannelGrid::from_fn(|_| rng.gen_range(-500.0..500.0));
    // 전역 극값을 알려진 위치에 둠
    blue = ChannelGrid::from_fn(|(r, c)| match (r, c) {
        (0, 0) => -1000.0,
        (1, 1) => 1000.0,
        _ => *blue.get(r, c),
    });

    let image = normalize_to_u8([&red, &green, &blue]);

    assert_eq!(image.pixel(0, 0)[2], 0);
    assert_eq!(image.pixel(1, 1)[2], 255);
    // u8이므로 [0, 255] 범위는 타입이 보장. 다른 위치는 양 끝이 아님
    let zeros = image.as_array().iter().filter(|&&v| v == 0).count();
    let maxes = image.as_array().iter().filter(|&&v| v == 255).count();
    assert_eq!(zeros, 1);
    assert_eq!(maxes, 1);
}

#[test]
fn 정규화는_채널별이_아닌_전역() {
    let red = ChannelGrid::from_fn(|_| 0.0);
    let green = ChannelGrid::from_fn(|_| 100.0);
    let blue = ChannelGrid::from_fn(|_| 50.0);

    let image = normalize_to_u8([&red, &green, &blue]);

    for r in 0..BLOCK_SIZE {
        for c in 0..BLOCK_SIZE {
            assert_eq!(image.pixel(r, c), [0, 255, 127]);
        }
    }
}

#[test]
fn 평탄한_그리드는_전부_0() {
    let flat = ChannelGrid::from_fn(|_| 32768.0);
    let image = normalize_to_u8([&flat, &flat, &flat]);
    assert!(image.as_array().iter().all(|&v| v == 0));

    let zero = ChannelGrid::<f64>::zeros();
    let image = normalize_to_u8([&zero, &zero, &zero]);
    assert!(image.as_array().iter().all(|&v| v == 0));
}

#[test]
fn 아주_작은_대비도_0과_255로_확장() {
    // min != max 이면 범위가 아무리 작아도 평탄한 것으로 보지 않음
    let base = ChannelGrid::from_fn(|_| 1e6);
    let bumped = ChannelGrid::from_fn(|idx| if idx == (7, 9) { 1e6 + 1e-4 } else { 1e6 });

    let image = normalize_to_u8([&base, &bumped, &base]);

    assert_eq!(image.pixel(7, 9), [0, 255, 0]);
    assert_eq!(image.as_array().iter().copied().max(), Some(255));
    assert_eq!(image.as_array().iter().filter(|&&v| v == 255).count(), 1);
}

#[test]
fn 값은_버림으로_u8_변환() {
    // 0..=2 범위 → 0, 127.5, 255 → 127로 버림
    let red = ChannelGrid::from_fn(|(r, _)| if r == 0 { 0.0 } else { 1.0 });
    let green = ChannelGrid::from_fn(|_| 1.0);
    let blue = ChannelGrid::from_fn(|(r, _)| if r == 0 { 2.0 } else { 1.0 });

    let image = normalize_to_u8([&red, &green, &blue]);
    assert_eq!(image.pixel(0, 0), [0, 127, 255]);
    assert_eq!(image.pixel(5, 5), [127, 127, 127]);
}
