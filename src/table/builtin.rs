use crate::models::{ContainerRate, ContainerSize, ProductVolume};

/// Port, size, volume (m3), price (target currency).
const CONTAINER_RATES: &[(&str, ContainerSize, f64, f64)] = &[
    ("Fuzhou FZG", ContainerSize::Gp20, 28.0, 5379.19),
    ("Fuzhou FZG", ContainerSize::Hc40, 68.0, 9706.88),
    ("Jiujiang JIU", ContainerSize::Gp20, 28.0, 5443.26),
    ("Ningbo NBG", ContainerSize::Gp20, 28.0, 5167.67),
    ("Ningbo NBG", ContainerSize::Hc40, 68.0, 9178.69),
    ("Qingdao QDG", ContainerSize::Gp20, 28.0, 5167.67),
    ("Qingdao QDG", ContainerSize::Hc40, 68.0, 9261.27),
    ("Tianjin Xingang TXG", ContainerSize::Gp20, 28.0, 4892.07),
    ("Xiamen XMG", ContainerSize::Gp20, 28.0, 4892.07),
    ("Yantian YTN / Shenzhen", ContainerSize::Gp20, 28.0, 5057.79),
    ("Yantian YTN / Shenzhen", ContainerSize::Hc40, 68.0, 9003.36),
    ("Haiphong HPH", ContainerSize::Gp20, 28.0, 4485.40),
    ("Haiphong HPH", ContainerSize::Hc40, 68.0, 7857.58),
];

/// Product type, unit volume (m3).
const PRODUCT_VOLUMES: &[(&str, f64)] = &[
    ("Dyne Sofa", 2.15),
    ("Dining Chair", 0.1363),
    ("Dining Table", 0.228866),
    ("Coffee Table", 1.212848),
    ("Occasional Chair", 0.5179),
    ("Dawn Sofa", 2.5),
    ("Dali Bowl", 0.07),
    ("Hudson Mug", 0.00145935),
];

pub fn container_rates() -> Vec<ContainerRate> {
    CONTAINER_RATES
        .iter()
        .map(|&(port, size, volume, price)| ContainerRate::new(port.to_string(), size, volume, price))
        .collect()
}

pub fn product_volumes() -> Vec<ProductVolume> {
    PRODUCT_VOLUMES
        .iter()
        .map(|&(product_type, volume)| ProductVolume::new(product_type.to_string(), volume))
        .collect()
}
