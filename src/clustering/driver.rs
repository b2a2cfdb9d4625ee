use super::distance::Distance;
use super::distance::Emd;
use super::distance::Euclidean;
use super::kmeans::Init;
use super::kmeans::KMeans;
use crate::cards::street::Street;
use crate::linear::matrix::Matrix;
use crate::linear::Scalar;
use crate::save::disk::Bytes;
use crate::save::disk::Disk;
use crate::strengths::files;
use anyhow::bail;
use anyhow::Result;

/// Cluster one street's feature matrix and persist the assignments.
///
/// Histogram streets cluster under EMD; the river's cluster-equity
/// vectors cluster under Euclidean distance.
pub fn cluster(street: Street) -> Result<()> {
    match street {
        Street::Pref => bail!("preflop is not clustered"),
        Street::Flop | Street::Turn => run::<u16, Emd>(street),
        Street::Rive => run::<f64, Euclidean>(street),
    }
}

fn run<T, D>(street: Street) -> Result<()>
where
    T: Scalar + Bytes,
    D: Distance,
{
    let path = files::lut_path(street);
    log::info!("loading {}", path);
    let data = Matrix::<T>::load(&path)?;
    log::info!(
        "clustering {} {} rows into {} clusters across {} workers",
        data.rows(),
        street,
        street.n_clusters(),
        num_cpus::get()
    );
    let mut kmeans = KMeans::<T, D>::new(street.n_clusters());
    kmeans.multiple_restarts(&data, crate::KMEANS_RESTARTS, Init::PlusPlus, crate::DRIVER_SEED);
    let assignments = kmeans.assignments().expect("trained").to_vec();
    files::prepare()?;
    assignments.save(&files::assignments_path(street))?;
    log::info!("saved {} assignments, loss {:.17}", street, kmeans.loss());
    Ok(())
}
