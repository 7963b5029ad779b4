use crate::core::codec::{encode, round_coefficient, Encoder};
use crate::core::types::{Channel, PixelGrid, BLOCK_SIZE};

#[test]
fn 반올림은_짝수_쪽으로() {
    assert_eq!(round_coefficient(0.5), 0);
    assert_eq!(round_coefficient(1.5), 2);
    assert_eq!(round_coefficient(2.5), 2);
    assert_eq!(round_coefficient(-2.5), -2);
    assert_eq!(round_coefficient(-3.5), -4);
    assert_eq!(round_coefficient(2.4999), 2);
    assert_eq!(round_coefficient(-0.2), 0);
}

#[test]
fn 단색_이미지는_채널별_dc만_남음() {
    let pixels = PixelGrid::solid([128, 128, 128]);
    let coeffs = encode(&pixels);

    for (channel, grid) in coeffs.iter() {
        assert_eq!(*grid.get(0, 0), 2_097_152, "{:?} DC", channel);
        let nonzero_ac = grid
            .as_array()
            .indexed_iter()
            .filter(|&(idx, &v)| idx != (0, 0) && v != 0)
            .count();
        assert_eq!(nonzero_ac, 0, "{:?} 채널에 AC 계수가 남음", channel);
    }
}

#[test]
fn 채널은_독립적으로_변환됨() {
    let pixels = PixelGrid::solid([255, 0, 10]);
    let coeffs = Encoder::new().encode(&pixels);

    assert_eq!(*coeffs.red.get(0, 0), 4 * 4096 * 255);
    assert_eq!(*coeffs.green.get(0, 0), 0);
    assert_eq!(*coeffs.blue.get(0, 0), 4 * 4096 * 10);
}

#[test]
fn 최대_밝기에서도_오버플로_없음() {
    let pixels = PixelGrid::solid([255, 255, 255]);
    let coeffs = encode(&pixels);
    assert_eq!(*coeffs.channel(Channel::Green).get(0, 0), 4_177_920);
}

#[test]
fn 수평_줄무늬는_첫_행에만_에너지() {
    // 열 방향으로 값이 바뀌지 않으면 행 인덱스 > 0 계수는 0
    let pixels = PixelGrid::from_fn(|_, c| {
        let v = (c * 4) as u8;
        [v, v, v]
    });
    let coeffs = encode(&pixels);

    for r in 1..BLOCK_SIZE {
        for c in 0..BLOCK_SIZE {
            assert_eq!(*coeffs.red.get(r, c), 0, "({}, {})", r, c);
        }
    }
    assert!(coeffs.red.get(0, 1).abs() > 0);
}
