use crate::core::types::{ChannelGrid, BLOCK_SIZE};
use ndarray::{Array, Array2, Axis};
use rustdct::{DctPlanner, TransformType2And3};
use std::f64::consts::SQRT_2;
use std::sync::Arc;

/// 64점 DCT 플랜을 보관하는 2D 변환기
///
/// planner는 재사용 가능하므로 변환기가 소유함
pub struct Dct2d {
    dct: Arc<dyn TransformType2And3<f64>>,
    ortho_scale: f64,
}

impl Default for Dct2d {
    fn default() -> Self {
        Self::new()
    }
}

impl Dct2d {
    pub fn new() -> Self {
        let mut planner = DctPlanner::<f64>::new();
        Self {
            dct: planner.plan_dct2(BLOCK_SIZE),
            ortho_scale: (2.0 / BLOCK_SIZE as f64).sqrt(),
        }
    }

    /// 비정규화 2D DCT-II
    pub fn forward(&self, grid: &ChannelGrid<f64>) -> ChannelGrid<f64> {
        let mut data = grid.as_array().to_owned();

        // --- 열별 DCT ---
        self.apply_along(&mut data, Axis(0), |lane| self.forward_1d(lane));
        // --- 행별 DCT ---
        self.apply_along(&mut data, Axis(1), |lane| self.forward_1d(lane));

        ChannelGrid::from_fn(|idx| data[idx])
    }

    /// 정규직교 2D DCT-III (DCT-II의 역변환)
    pub fn inverse(&self, grid: &ChannelGrid<f64>) -> ChannelGrid<f64> {
        let mut data = grid.as_array().to_owned();

        // 전치 행렬의 행 = 원본의 열
        self.apply_along(&mut data, Axis(0), |lane| self.inverse_1d(lane));
        self.apply_along(&mut data, Axis(1), |lane| self.inverse_1d(lane));

        ChannelGrid::from_fn(|idx| data[idx])
    }

    fn forward_1d(&self, buffer: &mut [f64]) {
        self.dct.process_dct2(buffer);
        for v in buffer.iter_mut() {
            *v *= 2.0;
        }
    }

    fn inverse_1d(&self, buffer: &mut [f64]) {
        // rustdct DCT-III은 x[0]/2 항을 쓰므로 DC를 √2배 해서 1/√N 스케일에 맞춤
        buffer[0] *= SQRT_2;
        self.dct.process_dct3(buffer);
        for v in buffer.iter_mut() {
            *v *= self.ortho_scale;
        }
    }

    /// `axis` 방향의 각 1D 레인에 변환 적용
    fn apply_along<F>(&self, data: &mut Array2<f64>, axis: Axis, transform: F)
    where
        F: Fn(&mut [f64]),
    {
        for mut lane in data.lanes_mut(axis) {
            let mut lane_vec = lane.to_vec();
            transform(lane_vec.as_mut_slice());
            lane.assign(&Array::from(lane_vec));
        }
    }
}

/// 채널 하나의 순방향 변환 (플랜 1회용)
pub fn forward_dct_2d(grid: &ChannelGrid<f64>) -> ChannelGrid<f64> {
    Dct2d::new().forward(grid)
}

/// 채널 하나의 역방향 변환 (플랜 1회용)
pub fn inverse_dct_2d(grid: &ChannelGrid<f64>) -> ChannelGrid<f64> {
    Dct2d::new().inverse(grid)
}
