//! Matrix helpers shared by camera projections and entity model matrices.

use glam::{DMat4, DVec3, DVec4};

/// Element order of a flattened 4x4 matrix handed to the device layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixLayout {
    /// Columns are contiguous (OpenGL default, `transpose = false`).
    #[default]
    ColumnMajor,
    /// Rows are contiguous (`transpose = true` on upload).
    RowMajor,
}

impl MatrixLayout {
    /// Value of the `transpose` flag a GL-style uniform upload expects for
    /// data in this layout.
    #[must_use]
    pub fn transpose_flag(self) -> bool {
        matches!(self, Self::RowMajor)
    }
}

/// Flatten `matrix` into single-precision uniform data.
#[must_use]
pub fn to_f32_array(matrix: &DMat4, layout: MatrixLayout) -> [f32; 16] {
    let flat = match layout {
        MatrixLayout::ColumnMajor => matrix.to_cols_array(),
        MatrixLayout::RowMajor => matrix.transpose().to_cols_array(),
    };
    flat.map(|v| v as f32)
}

/// Build a matrix from its four rows.
#[must_use]
pub fn from_rows(rows: [DVec4; 4]) -> DMat4 {
    DMat4::from_cols(rows[0], rows[1], rows[2], rows[3]).transpose()
}

/// Homogeneous row measuring the signed distance of a point from the plane
/// through `origin` with normal `axis`.
///
/// `row · (p, 1) = (axis · p - axis · origin) / |axis|`.
#[must_use]
pub fn plane_row(axis: DVec3, origin: DVec3) -> DVec4 {
    let length = axis.length();
    (axis / length).extend(-axis.dot(origin) / length)
}
