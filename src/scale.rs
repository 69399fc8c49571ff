//! フィット感スケールモジュール
//!
//! 一致した行の範囲内で採寸値がどの位置にあるかを0〜100の
//! ポジションに換算し、定性的なフィット感カテゴリに分類する。

use crate::measure;
use crate::table::SizeRow;

/// 範囲内ポジションを計算（0〜100、範囲外は負または100超）
///
/// min == max のときは50（範囲中央）と定義し、ゼロ除算を避ける。
pub fn fit_position(min: f64, max: f64, value: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        50.0
    } else {
        (value - min) / range * 100.0
    }
}

/// フィット感カテゴリ
///
/// しきい値は固定: [0,20) ゆったり、[20,80] 理想、(80,100] 密着、
/// 0未満は大きすぎ、100超は小さすぎ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitCategory {
    /// 理想的なフィット
    Ideal,
    /// 標準よりゆったり
    Looser,
    /// かなり密着
    VeryFitted,
    /// このサイズでは大きすぎる
    TooLarge,
    /// このサイズでは小さすぎる
    TooSmall,
}

impl FitCategory {
    /// ポジションからカテゴリを判定
    pub fn from_position(position: f64) -> Self {
        if position < 0.0 {
            FitCategory::TooLarge
        } else if position > 100.0 {
            FitCategory::TooSmall
        } else if position < 20.0 {
            FitCategory::Looser
        } else if position <= 80.0 {
            FitCategory::Ideal
        } else {
            FitCategory::VeryFitted
        }
    }

    /// 推奨範囲外か
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, FitCategory::TooLarge | FitCategory::TooSmall)
    }

    /// 表示名
    pub fn label(&self) -> &'static str {
        match self {
            FitCategory::Ideal => "理想的",
            FitCategory::Looser => "ゆったり",
            FitCategory::VeryFitted => "かなり密着",
            FitCategory::TooLarge => "大きすぎ",
            FitCategory::TooSmall => "小さすぎ",
        }
    }

    /// ユーザー向けの説明文
    pub fn description(&self) -> &'static str {
        match self {
            FitCategory::Ideal => "この寸法は標準的な体型に収まっています。",
            FitCategory::Looser => "この部分は標準よりゆったりした着心地になります。",
            FitCategory::VeryFitted => "体に密着します。ゆとりが欲しい場合はワンサイズ上をご検討ください。",
            FitCategory::TooLarge | FitCategory::TooSmall => {
                "この寸法はこのサイズの推奨範囲外です。"
            }
        }
    }
}

/// 1寸法分のフィット感評価
#[derive(Debug, Clone)]
pub struct FitScale {
    pub dimension: String,
    pub position: f64,
    pub category: FitCategory,
}

impl FitScale {
    /// 一致した行と採寸値からフィット感を評価
    ///
    /// 採寸値が数値化できない、または行の範囲が数値でない場合はNone
    /// （その寸法のスケールは表示しない）。
    pub fn evaluate(row: &SizeRow, dimension: &str, raw_value: &str) -> Option<Self> {
        let value = measure::parse_value(raw_value)?;
        let range = row.range(dimension)?;
        if range.min.is_nan() || range.max.is_nan() {
            return None;
        }

        let position = fit_position(range.min, range.max, value);
        Some(Self {
            dimension: dimension.to_string(),
            position,
            category: FitCategory::from_position(position),
        })
    }

    /// 表示用ポジション（マーカーが枠から出ないよう[-2,102]にクランプ）
    pub fn display_position(&self) -> f64 {
        self.position.clamp(-2.0, 102.0)
    }
}
