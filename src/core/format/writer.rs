use crate::core::types::{Channel, ChannelGrid, CoefficientSet};

/// `DCT_<CH> = "<csv>"` 한 줄 (개행 없음)
pub fn format_channel_line(channel: Channel, grid: &ChannelGrid<i32>) -> String {
    let csv = grid
        .values()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("DCT_{} = \"{}\"", channel.label(), csv)
}

/// 세 채널을 줄바꿈으로 연결 (마지막 줄 뒤 개행 없음)
pub fn format_coefficients(coefficients: &CoefficientSet) -> String {
    coefficients
        .iter()
        .map(|(channel, grid)| format_channel_line(channel, grid))
        .collect::<Vec<_>>()
        .join("\n")
}
