use std::cmp::max;

/// Calculates the strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data
/// array to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Determines the output shape resulting from broadcasting two input shapes.
///
/// Follows NumPy/PyTorch broadcasting rules:
/// 1. If the shapes have different numbers of dimensions, prepend 1s to the
///    shorter shape.
/// 2. Compare dimensions element-wise from right to left.
/// 3. Dimensions are compatible if they are equal, or one of them is 1.
///
/// Returns `Ok(broadcast_shape)` if the shapes are compatible, `Err(String)`
/// otherwise.
pub fn broadcast_shapes(shape_a: &[usize], shape_b: &[usize]) -> Result<Vec<usize>, String> {
    let rank_a = shape_a.len();
    let rank_b = shape_b.len();
    let max_rank = max(rank_a, rank_b);
    let mut result_shape = vec![0; max_rank];

    for i in 0..max_rank {
        let dim_a = shape_a.get(rank_a.wrapping_sub(1 + i)).copied().unwrap_or(1);
        let dim_b = shape_b.get(rank_b.wrapping_sub(1 + i)).copied().unwrap_or(1);

        if dim_a == dim_b {
            result_shape[max_rank - 1 - i] = dim_a;
        } else if dim_a == 1 {
            result_shape[max_rank - 1 - i] = dim_b;
        } else if dim_b == 1 {
            result_shape[max_rank - 1 - i] = dim_a;
        } else {
            return Err(format!(
                "Shapes {:?} and {:?} are not broadcastable: dimension size mismatch at index {} ({} vs {})",
                shape_a,
                shape_b,
                max_rank - 1 - i,
                dim_a,
                dim_b
            ));
        }
    }
    Ok(result_shape)
}

/// Converts a linear index into multi-dimensional coordinates.
pub fn index_to_coord(index: usize, strides: &[usize], shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut coord = vec![0; rank];
    let mut current_index = index;
    for i in 0..rank {
        if strides[i] == 0 {
            coord[i] = 0;
        } else {
            coord[i] = current_index / strides[i];
            current_index %= strides[i];
        }
    }
    coord
}

/// Maps coordinates in a broadcast output back to the flat index of an
/// original operand. Dimensions that were 1 in the operand pin to index 0.
pub fn coord_to_index_broadcasted(
    target_coord: &[usize],
    original_shape: &[usize],
    original_strides: &[usize],
) -> usize {
    if original_shape.is_empty() {
        return 0; // Scalar
    }
    let rank_diff = target_coord.len().saturating_sub(original_shape.len());
    let mut index = 0;
    for i in 0..original_shape.len() {
        let coord_idx = rank_diff + i;
        let effective_coord = if original_shape[i] == 1 {
            0
        } else {
            target_coord[coord_idx]
        };
        index += effective_coord * original_strides[i];
    }
    index
}

/// Applies a binary element-wise operation over two buffers whose shapes
/// broadcast to `out_shape`, producing the flat output buffer.
pub(crate) fn broadcast_zip<F>(
    a_data: &[f32],
    a_shape: &[usize],
    b_data: &[f32],
    b_shape: &[usize],
    out_shape: &[usize],
    f: F,
) -> Vec<f32>
where
    F: Fn(f32, f32) -> f32,
{
    let numel: usize = out_shape.iter().product();
    let out_strides = calculate_strides(out_shape);
    let a_strides = calculate_strides(a_shape);
    let b_strides = calculate_strides(b_shape);

    let mut out = Vec::with_capacity(numel);
    for i in 0..numel {
        let coords = index_to_coord(i, &out_strides, out_shape);
        let a_idx = coord_to_index_broadcasted(&coords, a_shape, &a_strides);
        let b_idx = coord_to_index_broadcasted(&coords, b_shape, &b_strides);
        out.push(f(a_data[a_idx], b_data[b_idx]));
    }
    out
}

/// Reduces a gradient buffer back down to an operand's shape by summing over
/// the axes that were expanded during broadcasting.
///
/// When broadcasting occurred in the forward pass (e.g. A[2,3] + B[3] ->
/// C[2,3]), the gradient flowing back to the smaller operand must be summed
/// across the broadcast dimensions so that grad and data keep identical
/// shapes. Each output element's gradient is added into the operand element
/// it was read from, which is exactly the transpose of the broadcast.
pub(crate) fn reduce_broadcast_grad(
    grad: &[f32],
    grad_shape: &[usize],
    target_shape: &[usize],
) -> Vec<f32> {
    if grad_shape == target_shape {
        return grad.to_vec();
    }
    let target_numel: usize = target_shape.iter().product();
    let grad_strides = calculate_strides(grad_shape);
    let target_strides = calculate_strides(target_shape);

    let mut reduced = vec![0.0f32; target_numel];
    for (i, g) in grad.iter().enumerate() {
        let coords = index_to_coord(i, &grad_strides, grad_shape);
        let t_idx = coord_to_index_broadcasted(&coords, target_shape, &target_strides);
        reduced[t_idx] += g;
    }
    reduced
}
