use crate::core::error::{CodecError, CodecResult};
use crate::core::types::{Channel, ChannelGrid, CoefficientSet, BLOCK_LEN};

/// 계수 한 줄 파싱
///
/// 첫 `"` 이후 내용만 사용(없으면 줄 전체), 끝의 `"` 하나 제거,
/// 모든 공백 제거 후 `,`로 분리. 정확히 4096개 정수가 아니면 실패.
/// 부족분을 채우거나 초과분을 자르지 않음
pub fn parse_channel_line(line: &str, channel: Channel) -> CodecResult<ChannelGrid<i32>> {
    let line = line.trim();
    let payload = match line.split_once('"') {
        Some((label, rest)) => {
            check_label(label, channel);
            rest
        }
        None => line,
    };
    let payload = payload.strip_suffix('"').unwrap_or(payload);
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    let tokens: Vec<&str> = if compact.is_empty() {
        Vec::new()
    } else {
        compact.split(',').collect()
    };
    if tokens.len() != BLOCK_LEN {
        return Err(CodecError::Format(format!(
            "expected {} coefficients for channel {}, got {}",
            BLOCK_LEN,
            channel.label(),
            tokens.len()
        )));
    }

    let values = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i32>().map_err(|e| {
                CodecError::Format(format!(
                    "channel {}: token #{} {:?} is not an integer ({})",
                    channel.label(),
                    i,
                    token,
                    e
                ))
            })
        })
        .collect::<CodecResult<Vec<i32>>>()?;

    ChannelGrid::from_vec(values)
}

/// 계수 파일 전체 파싱
///
/// 빈 줄은 건너뜀. 비어 있지 않은 처음 세 줄을 R, G, B로 사용하며
/// 세 줄 미만이면 실패. 채널 하나라도 실패하면 전체 실패
pub fn parse_coefficients(text: &str) -> CodecResult<CoefficientSet> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() < Channel::ALL.len() {
        return Err(CodecError::Format(format!(
            "expected at least {} non-empty lines, got {}",
            Channel::ALL.len(),
            lines.len()
        )));
    }
    if lines.len() > Channel::ALL.len() {
        log::warn!(
            "비어 있지 않은 줄 {}개 중 처음 {}개만 사용",
            lines.len(),
            Channel::ALL.len()
        );
    }

    let red = parse_channel_line(lines[0], Channel::Red)?;
    let green = parse_channel_line(lines[1], Channel::Green)?;
    let blue = parse_channel_line(lines[2], Channel::Blue)?;

    Ok(CoefficientSet::new(red, green, blue))
}

/// `DCT_X =` 라벨이 순서와 다르면 경고만 남김
fn check_label(label: &str, channel: Channel) {
    let name = label.trim().trim_end_matches('=').trim();
    if let Some(found) = name.strip_prefix("DCT_") {
        if found != channel.label() {
            log::warn!(
                "{}번째 줄 라벨 DCT_{} 이(가) 채널 {}에 대응",
                channel.index() + 1,
                found,
                channel.label()
            );
        }
    }
}
