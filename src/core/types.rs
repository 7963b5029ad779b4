//! # 코덱 데이터 구조
//!
//! 픽셀 그리드, 채널 그리드, 계수 세트, 복원 이미지.
//! 모든 그리드는 64×64 고정 크기이며 행 우선(row-major) 순서를 따름

use super::error::{CodecError, CodecResult};
use ndarray::{Array2, Array3, Axis};

/// 블록 한 변의 길이
pub const BLOCK_SIZE: usize = 64;
/// 채널 하나의 원소 개수 (64 × 64)
pub const BLOCK_LEN: usize = BLOCK_SIZE * BLOCK_SIZE;
/// 색상 채널 개수
pub const CHANNEL_COUNT: usize = 3;

/// 색상 채널
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// 직렬화 순서 (R, G, B)
    pub const ALL: [Channel; CHANNEL_COUNT] = [Channel::Red, Channel::Green, Channel::Blue];

    /// 픽셀 내 채널 인덱스
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// 계수 파일에서 쓰는 라벨 (`DCT_R` 의 `R`)
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// 64×64 단일 채널 그리드
///
/// 인코더 중간값은 `ChannelGrid<f64>`, 직렬화/디코딩 계수는 `ChannelGrid<i32>`.
/// 생성 시점에 원소 개수(4096)를 검증하므로 이후 단계는 크기 검사가 필요 없음
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelGrid<T> {
    data: Array2<T>,
}

impl<T: Clone> ChannelGrid<T> {
    /// 행 우선 순서의 값 목록에서 생성
    pub fn from_vec(values: Vec<T>) -> CodecResult<Self> {
        if values.len() != BLOCK_LEN {
            return Err(CodecError::Format(format!(
                "expected {} values per channel, got {}",
                BLOCK_LEN,
                values.len()
            )));
        }
        let data = Array2::from_shape_vec((BLOCK_SIZE, BLOCK_SIZE), values)
            .map_err(|e| CodecError::Format(e.to_string()))?;
        Ok(Self { data })
    }

    /// 64×64 배열에서 생성
    pub fn from_array(data: Array2<T>) -> CodecResult<Self> {
        if data.dim() != (BLOCK_SIZE, BLOCK_SIZE) {
            return Err(CodecError::Format(format!(
                "expected {}x{} grid, got {}x{}",
                BLOCK_SIZE,
                BLOCK_SIZE,
                data.nrows(),
                data.ncols()
            )));
        }
        Ok(Self { data })
    }

    /// (행, 열) 함수로 생성
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut((usize, usize)) -> T,
    {
        Self {
            data: Array2::from_shape_fn((BLOCK_SIZE, BLOCK_SIZE), f),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[(row, col)]
    }

    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }

    /// 행 우선 순서로 값 순회
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }

    /// 행 우선 순서의 평탄화된 값 목록
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }

    /// 원소 단위 변환 (새 그리드 생성)
    pub fn map<U, F>(&self, f: F) -> ChannelGrid<U>
    where
        F: FnMut(&T) -> U,
    {
        ChannelGrid {
            data: self.data.map(f),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl ChannelGrid<f64> {
    pub fn zeros() -> Self {
        Self {
            data: Array2::zeros((BLOCK_SIZE, BLOCK_SIZE)),
        }
    }
}

/// 64×64 RGB 입력 이미지 (생성 후 불변)
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    data: Array3<u8>,
}

impl PixelGrid {
    /// RGB 인터리브 버퍼(행 우선, 픽셀당 3바이트)에서 생성
    pub fn from_raw(raw: Vec<u8>) -> CodecResult<Self> {
        let expected = BLOCK_LEN * CHANNEL_COUNT;
        if raw.len() != expected {
            return Err(CodecError::Format(format!(
                "expected {} bytes of RGB data, got {}",
                expected,
                raw.len()
            )));
        }
        let data = Array3::from_shape_vec((BLOCK_SIZE, BLOCK_SIZE, CHANNEL_COUNT), raw)
            .map_err(|e| CodecError::Format(e.to_string()))?;
        Ok(Self { data })
    }

    /// (행, 열) → RGB 함수로 생성
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> [u8; 3],
    {
        Self {
            data: Array3::from_shape_fn((BLOCK_SIZE, BLOCK_SIZE, CHANNEL_COUNT), |(r, c, ch)| {
                f(r, c)[ch]
            }),
        }
    }

    /// 단색 이미지
    pub fn solid(rgb: [u8; 3]) -> Self {
        Self::from_fn(|_, _| rgb)
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.data[(row, col, 0)],
            self.data[(row, col, 1)],
            self.data[(row, col, 2)],
        ]
    }

    /// 채널 하나를 실수 그리드로 추출
    pub fn channel(&self, channel: Channel) -> ChannelGrid<f64> {
        ChannelGrid {
            data: self.data.index_axis(Axis(2), channel.index()).mapv(f64::from),
        }
    }
}

/// R, G, B 세 채널의 정수 DCT 계수
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSet {
    pub red: ChannelGrid<i32>,
    pub green: ChannelGrid<i32>,
    pub blue: ChannelGrid<i32>,
}

impl CoefficientSet {
    pub fn new(red: ChannelGrid<i32>, green: ChannelGrid<i32>, blue: ChannelGrid<i32>) -> Self {
        Self { red, green, blue }
    }

    pub fn channel(&self, channel: Channel) -> &ChannelGrid<i32> {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// (채널, 그리드) 쌍을 R, G, B 순서로 순회
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &ChannelGrid<i32>)> + '_ {
        Channel::ALL.into_iter().map(move |ch| (ch, self.channel(ch)))
    }
}

/// 디코딩 결과 64×64×3 바이트 이미지
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructedImage {
    data: Array3<u8>,
}

impl ReconstructedImage {
    pub(crate) fn from_array(data: Array3<u8>) -> Self {
        debug_assert_eq!(data.dim(), (BLOCK_SIZE, BLOCK_SIZE, CHANNEL_COUNT));
        Self { data }
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.data[(row, col, 0)],
            self.data[(row, col, 1)],
            self.data[(row, col, 2)],
        ]
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    /// RGB 인터리브 버퍼 (행 우선)
    pub fn to_raw_vec(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    pub fn width(&self) -> u32 {
        BLOCK_SIZE as u32
    }

    pub fn height(&self) -> u32 {
        BLOCK_SIZE as u32
    }
}
